//! Shared helpers for command handlers.

use std::error::Error;
use std::path::PathBuf;

use standup_core::{Config, RecordStore, SubmissionService};

/// Resolve the record store: --data-file flag beats config beats default.
pub fn open_store(config: &Config, data_file: Option<PathBuf>) -> Result<RecordStore, Box<dyn Error>> {
    let path = match data_file {
        Some(path) => path,
        None => config.data_file()?,
    };
    Ok(RecordStore::open(path))
}

pub fn open_service(
    config: &Config,
    data_file: Option<PathBuf>,
) -> Result<SubmissionService, Box<dyn Error>> {
    Ok(SubmissionService::new(open_store(config, data_file)?))
}

/// Capability check for moderator operations. The core never sees this;
/// gating happens here, at the caller.
pub fn require_moderator(config: &Config, password: Option<&str>) -> Result<(), Box<dyn Error>> {
    match &config.moderator_password {
        Some(expected) if password != Some(expected.as_str()) => {
            Err("moderator password required (pass --password)".into())
        }
        _ => Ok(()),
    }
}
