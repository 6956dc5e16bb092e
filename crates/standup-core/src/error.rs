//! Core error types for standup-core.
//!
//! This module defines the error hierarchy using thiserror. Every failure
//! in the core surfaces as a typed result; nothing here terminates the
//! process, because the calling front end must stay interactive after any
//! single failed operation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for standup-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing resource unreachable or unwritable. A failed write is
    /// reported after a single attempt; retrying is the caller's call.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing resource exists but cannot be parsed. Deliberately
    /// distinct from "no file yet": treating a corrupt file as an empty
    /// store would silently discard data.
    #[error("Report file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the store for writing.
    #[error("Failed to serialize report data: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to determine the data directory
    #[error("Failed to resolve data directory: {0}")]
    DataDir(String),
}

/// Validation errors. Recoverable; the front end re-prompts.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is empty after trimming
    #[error("Required field '{field}' is empty")]
    EmptyField { field: &'static str },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
