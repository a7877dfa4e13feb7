//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Day-boundary convention for "today" (UTC by default, local opt-in)
//! - Optional override for the topic snapshot path
//!
//! Configuration is stored at `~/.config/reviso/config.toml`.

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/reviso/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Derive "today" from local time instead of UTC. Both start dates and
    /// review dates use whichever convention is active, so day boundaries
    /// stay consistent.
    #[serde(default)]
    pub use_local_time: bool,
    /// Explicit topic snapshot path; defaults to `<data_dir>/topics.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = super::data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from(CONFIG_FILE_NAME),
            message: e.to_string(),
        })?;
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Load the configuration, falling back to defaults if the file does
    /// not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(data) => toml::from_str(&data).map_err(|e| ConfigError::ParseFailed(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let data = toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, data).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// The current calendar date under the configured convention.
    pub fn today(&self) -> NaiveDate {
        if self.use_local_time {
            Local::now().date_naive()
        } else {
            Utc::now().date_naive()
        }
    }
}
