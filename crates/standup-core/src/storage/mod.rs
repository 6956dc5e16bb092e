mod config;
mod record_store;

pub use config::Config;
pub use record_store::{FileBackend, MemoryBackend, RecordStore, StorageBackend};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/standup[-dev]/` based on STANDUP_ENV.
///
/// Set STANDUP_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STANDUP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("standup-dev")
    } else {
        base_dir.join("standup")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::DataDir(e.to_string()))?;
    Ok(dir)
}
