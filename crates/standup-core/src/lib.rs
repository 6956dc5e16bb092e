//! # Standup Core Library
//!
//! Core business logic for standup, a status-report collector for a small
//! research group. Members submit a short progress note and an open
//! question once per day; a moderator later pulls a uniformly-random past
//! report to drive discussion or browses everything in a rolling window.
//! All operations are available through this library; the CLI binary is a
//! thin presentation layer over it, and any other front end consumes the
//! same [`SubmissionService`] surface.
//!
//! ## Architecture
//!
//! - **RecordStore**: one pretty-printed JSON file holding the full
//!   date -> user -> submission map, replaced atomically on save, with the
//!   whole load-modify-save cycle serialized in-process
//! - **Window**: pure rolling-window arithmetic over the store's date keys
//! - **Sampler**: two-stage (date, then user) uniform random selection
//!   with an injected randomness source
//! - **SubmissionService**: validation plus orchestration of the above
//! - **Legacy**: read-only import adapter for the old per-day flat files
//!
//! ## Key Components
//!
//! - [`SubmissionService`]: the operation surface front ends call
//! - [`RecordStore`]: durable load/save/upsert over a storage backend
//! - [`Config`]: deployment settings for the front end

pub mod error;
pub mod legacy;
pub mod model;
pub mod sampler;
pub mod service;
pub mod storage;
pub mod window;

pub use error::{ConfigError, CoreError, Result, StoreError, ValidationError};
pub use model::{DateBucket, Store, Submission};
pub use sampler::{sample, Pick};
pub use service::{Ack, SubmissionService};
pub use storage::{data_dir, Config, FileBackend, MemoryBackend, RecordStore, StorageBackend};
pub use window::window;
