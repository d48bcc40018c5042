//! Settings file parsing and discovery

use crate::config::types::{project_dirs, Settings};
use crate::error::{ConfigError, ConfigResult};
use directories::BaseDirs;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Default settings file name
pub const CONFIG_FILE_NAME: &str = "mapdn.yml";

/// Environment variable naming a settings file
pub const CONFIG_ENV_VAR: &str = "MAPDN_CONFIG";

/// Find the settings file to load, if any
///
/// An explicit path wins, then `MAPDN_CONFIG`, then `mapdn.yml` in the user
/// config directory. The first two must exist; the last is optional.
pub fn find_config_file(explicit: Option<&Path>) -> ConfigResult<Option<PathBuf>> {
    find_config_file_from(
        explicit,
        env::var_os(CONFIG_ENV_VAR),
        project_dirs().map(|d| d.config_dir().to_path_buf()),
    )
}

/// Find the settings file given each candidate source
pub fn find_config_file_from(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> ConfigResult<Option<PathBuf>> {
    let required = explicit
        .map(Path::to_path_buf)
        .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from));

    if let Some(path) = required {
        let path = expand_home(&path);
        if path.is_file() {
            return Ok(Some(path));
        }
        return Err(ConfigError::NotFound(path));
    }

    Ok(config_dir
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file()))
}

/// Parse a settings file from a path
pub fn parse_config_file(path: &Path) -> ConfigResult<Settings> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse settings from a string
///
/// Paths starting with `~` are expanded against the home directory.
pub fn parse_config(yaml: &str) -> Result<Settings, serde_yaml::Error> {
    let settings: Settings = if yaml.trim().is_empty() {
        Settings::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok(expand_paths(settings))
}

/// Load settings from the discovered file, or defaults when there is none
pub fn load_settings(explicit: Option<&Path>) -> ConfigResult<(Settings, Option<PathBuf>)> {
    match find_config_file(explicit)? {
        Some(path) => Ok((parse_config_file(&path)?, Some(path))),
        None => Ok((Settings::default(), None)),
    }
}

fn expand_paths(mut settings: Settings) -> Settings {
    settings.database = expand_home(&settings.database);
    settings.password_file = expand_home(&settings.password_file);
    settings
}

/// Expand a leading `~` to the current user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    let rest = match path.strip_prefix("~") {
        Ok(rest) => rest,
        Err(_) => return path.to_path_buf(),
    };

    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}
