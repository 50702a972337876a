//! Settings file and store path resolution.
//!
//! Foxhole needs almost no configuration: the only setting is an optional
//! override for the store file location, read from `config.toml` in the
//! platform config directory. The store itself never computes paths; it is
//! handed the resolved path at construction.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings stored in `<config dir>/foxhole/config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Override for the encrypted store file path.
    #[serde(default)]
    pub store: Option<PathBuf>,
}

impl Settings {
    /// Load settings, treating an absent file as defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the file exists but is not valid TOML.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(constants::CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        Ok(settings)
    }

    /// The store path to use: the override if set, the platform default
    /// otherwise.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store {
            Some(path) => Ok(path.clone()),
            None => default_store_path(),
        }
    }
}

/// Foxhole's directory under the platform config directory
/// (`~/.config/foxhole` on Linux, `~/Library/Application Support/foxhole`
/// on macOS, `%APPDATA%\foxhole` on Windows).
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(constants::APP_DIR))
}

/// Default location of the encrypted store file.
pub fn default_store_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(constants::STORE_FILE))
}
