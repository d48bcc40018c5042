//! Settings validation
//!
//! This module checks loaded settings before anything touches the store.

use crate::config::types::Settings;
use crate::error::{ConfigError, ConfigResult};
use crate::mapping::DnRules;
use std::path::{Component, Path};

/// Validate settings and compile the distinguished name rules
pub fn validate_settings(settings: &Settings) -> ConfigResult<DnRules> {
    validate_table_name(&settings.table)?;
    validate_home_path("database", &settings.database)?;
    validate_home_path("password_file", &settings.password_file)?;

    if settings.max_dn_length == 0 {
        return Err(ConfigError::Invalid(
            "max_dn_length must be greater than zero".to_string(),
        ));
    }

    DnRules::new(settings.max_dn_length, &settings.dn_pattern).map_err(|e| {
        ConfigError::Invalid(format!("Invalid dn_pattern '{}': {}", settings.dn_pattern, e))
    })
}

/// Validate a table name
///
/// The name is spliced into SQL, so only plain identifiers are allowed.
pub fn validate_table_name(table: &str) -> ConfigResult<()> {
    let mut chars = table.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "Invalid table name: '{}'. Must be a plain SQL identifier",
            table
        )))
    }
}

/// Reject paths still starting with `~` after home expansion
///
/// Only `~/` is expanded; `~user/` forms are not resolved.
pub fn validate_home_path(field: &str, path: &Path) -> ConfigResult<()> {
    match path.components().next() {
        Some(Component::Normal(first)) if first.to_string_lossy().starts_with('~') => {
            Err(ConfigError::Invalid(format!(
                "{} '{}': only '~/' is expanded, '~user/' paths are not supported",
                field,
                path.display()
            )))
        }
        _ => Ok(()),
    }
}
