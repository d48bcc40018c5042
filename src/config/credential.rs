//! Database password loading

use crate::error::{ConfigError, ConfigResult};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The database password
///
/// Debug output is redacted so the secret never ends up in diagnostics.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(password: impl Into<String>) -> Self {
        Credential(password.into())
    }

    /// The password text
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Read the password from the first line of a file
pub fn read_credential(path: &Path) -> ConfigResult<Credential> {
    let to_error = |source| ConfigError::Credential {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(to_error)?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).map_err(to_error)?;

    let password = line.trim_end_matches(['\n', '\r']);
    if password.is_empty() {
        return Err(ConfigError::EmptyCredential(path.to_path_buf()));
    }

    Ok(Credential(password.to_string()))
}
