//! Error types for mapdn

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mapdn operations
pub type Result<T> = std::result::Result<T, MapdnError>;

/// Main error type for mapdn
#[derive(Error, Debug)]
pub enum MapdnError {
    /// Bad flag combinations and distinguished name validation failures
    #[error("{0}")]
    Request(#[from] RequestError),

    /// Settings and credential errors
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Mapping store errors
    #[error("{0}")]
    Store(#[from] StoreError),

    /// I/O errors (writing the export)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MapdnError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MapdnError::Request(e) if e.is_usage() => 2,
            MapdnError::Request(_) => 3,
            MapdnError::Config(_) => 4,
            MapdnError::Store(StoreError::Conflict { .. }) => 5,
            MapdnError::Store(_) | MapdnError::Io(_) => 1,
        }
    }

    /// Whether the error is reported as a warning rather than an error
    pub fn is_warning(&self) -> bool {
        matches!(self, MapdnError::Store(StoreError::Conflict { .. }))
    }
}

/// Command-line request errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Must choose either --add or --delete.")]
    ConflictingOperations,

    #[error("Must provide --dn and --user options for adding and deleting entries in the database")]
    MissingOperands,

    #[error("Must specify add, delete, or export operation.")]
    NoOperation,

    #[error("Distinguished Name of length {length} is longer than maximum length {max}")]
    DnTooLong { length: usize, max: usize },

    #[error("Invalid character in Distinguished Name")]
    InvalidDnCharacter,
}

impl RequestError {
    /// Usage errors are flag problems; the rest are validation failures
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            RequestError::ConflictingOperations
                | RequestError::MissingOperands
                | RequestError::NoOperation
        )
    }
}

/// Settings and credential errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Settings file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read settings file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Failed to read database password. {path}: {source}")]
    Credential { path: PathBuf, source: io::Error },

    #[error("Failed to read database password. {0} is empty")]
    EmptyCredential(PathBuf),
}

/// Mapping store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to open mapping database '{path}': {source}")]
    Open {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Failed to open mapping database '{0}': no such file")]
    Missing(PathBuf),

    #[error("Distinguished name is already mapped")]
    Conflict { dn: String },

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Specialized result type for request validation
pub type RequestResult<T> = std::result::Result<T, RequestError>;

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_with_two() {
        for e in [
            RequestError::ConflictingOperations,
            RequestError::MissingOperands,
            RequestError::NoOperation,
        ] {
            assert!(e.is_usage());
            assert_eq!(MapdnError::from(e).exit_code(), 2);
        }
    }

    #[test]
    fn test_validation_errors_exit_with_three() {
        let err = MapdnError::from(RequestError::DnTooLong {
            length: 300,
            max: 255,
        });
        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "Distinguished Name of length 300 is longer than maximum length 255"
        );
        assert_eq!(MapdnError::from(RequestError::InvalidDnCharacter).exit_code(), 3);
    }

    #[test]
    fn test_conflict_is_warning() {
        let err = MapdnError::from(StoreError::Conflict {
            dn: "cn=alice".to_string(),
        });
        assert!(err.is_warning());
        assert_eq!(err.exit_code(), 5);
        assert_eq!(err.to_string(), "Distinguished name is already mapped");
    }

    #[test]
    fn test_credential_error_message() {
        let err = MapdnError::from(ConfigError::EmptyCredential(PathBuf::from("/tmp/pw")));
        assert!(!err.is_warning());
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().starts_with("Failed to read database password."));
    }
}
