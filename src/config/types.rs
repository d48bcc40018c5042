//! Core settings types
//!
//! This module defines the data structures that represent a mapdn.yml file.

use crate::mapping::{DEFAULT_DN_PATTERN, DEFAULT_MAX_DN_LENGTH};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default table holding the mappings
pub const DEFAULT_TABLE: &str = "dnusermap";

/// File name of the database inside the data directory
const DATABASE_FILE_NAME: &str = "mapdn.db";

/// File name of the password file inside the config directory
const PASSWORD_FILE_NAME: &str = "admindn";

/// Process-wide settings, fixed once loaded
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Path of the mapping database
    pub database: PathBuf,

    /// File whose first line is the database password
    pub password_file: PathBuf,

    /// Table holding the (dn, user) rows
    pub table: String,

    /// Maximum distinguished name length in characters
    pub max_dn_length: usize,

    /// Pattern a distinguished name must fully match
    pub dn_pattern: String,
}

impl Default for Settings {
    fn default() -> Self {
        let dirs = project_dirs();

        Settings {
            database: dirs
                .as_ref()
                .map(|d| d.data_dir().join(DATABASE_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(DATABASE_FILE_NAME)),
            password_file: dirs
                .as_ref()
                .map(|d| d.config_dir().join(PASSWORD_FILE_NAME))
                .unwrap_or_else(|| PathBuf::from(PASSWORD_FILE_NAME)),
            table: DEFAULT_TABLE.to_string(),
            max_dn_length: DEFAULT_MAX_DN_LENGTH,
            dn_pattern: DEFAULT_DN_PATTERN.to_string(),
        }
    }
}

/// Per-user directories for mapdn, if a home directory can be determined
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "mapdn")
}
