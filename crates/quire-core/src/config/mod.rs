//! Client configuration.
//!
//! Provides a unified `AppConfig` loaded by the desktop app and the CLI, and
//! the data directory resolution both front ends share.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ThemeMode;

const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "quire";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "QUIRE_DATA_DIR";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "QUIRE_CONFIG";

/// User configuration read from `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding the notebook store
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Preferred theme for the desktop app
    #[serde(default)]
    pub theme: ThemeMode,
}

impl AppConfig {
    /// Load from `QUIRE_CONFIG` or the platform config directory.
    pub fn load() -> Result<Self> {
        match default_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|error| {
            Error::Config(format!("failed to read {}: {error}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|error| {
            Error::Config(format!("failed to parse {}: {error}", path.display()))
        })
    }

    /// Resolve the data directory.
    ///
    /// Order: explicit flag, `QUIRE_DATA_DIR`, config file, platform default.
    pub fn resolve_data_dir(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        let from_env = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty());
        self.resolve_data_dir_with(explicit, from_env)
    }

    fn resolve_data_dir_with(
        &self,
        explicit: Option<PathBuf>,
        from_env: Option<PathBuf>,
    ) -> Result<PathBuf> {
        if let Some(path) = explicit.or(from_env).or_else(|| self.data_dir.clone()) {
            return Ok(path);
        }

        default_data_dir()
            .ok_or_else(|| Error::Config("could not determine a data directory".into()))
    }
}

/// Config file location: `QUIRE_CONFIG` or `<config dir>/quire/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|path| !path.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Platform data directory for the store, e.g. `~/.local/share/quire`.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
}
