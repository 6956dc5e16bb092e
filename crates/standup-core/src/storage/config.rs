//! TOML-based application configuration.
//!
//! Stores deployment settings for the front end:
//! - Default rolling window length for pick/history
//! - The moderator passphrase checked by the caller before moderator
//!   operations (the core itself never reads it)
//! - An optional override for the submissions file location
//!
//! Configuration is stored at `~/.config/standup/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/standup/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rolling window length in days used when the caller does not pass one.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Moderator passphrase. When unset, moderator operations are open;
    /// a single-user local install has no one to gate.
    #[serde(default)]
    pub moderator_password: Option<String>,

    /// Override for the submissions file. Defaults to
    /// `<data_dir>/submissions.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_window_days() -> u32 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            moderator_password: None,
            data_file: None,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Resolve the submissions file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be created.
    pub fn data_file(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("submissions.json")),
        }
    }
}
