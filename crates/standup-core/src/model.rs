//! Persisted data model for status reports.
//!
//! The entire persisted state is a single map from calendar date
//! (`YYYY-MM-DD`) to a bucket of per-user submissions. BTreeMaps keep the
//! serialized JSON stable and human-diffable across saves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date-key format used throughout the store.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format recorded on each submission.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// One member's progress/question report for one calendar date.
///
/// Immutable once written except by a new upsert from the same user on the
/// same date, which fully replaces it. The user name is the bucket key, not
/// a field, matching the on-disk JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Free-text progress report
    pub progress: String,

    /// Free-text open question
    pub question: String,

    /// Time of day the report was submitted, `HH:MM:SS`. Legacy imports
    /// carry no time of day and record `00:00:00`.
    #[serde(rename = "timestamp", default)]
    pub submitted_at: String,
}

/// All submissions recorded for a single calendar date, keyed by user name.
///
/// User-name uniqueness per date is the primary key: the latest upsert wins
/// and no edit history is kept.
pub type DateBucket = BTreeMap<String, Submission>;

/// The full persisted state: calendar date -> bucket.
///
/// Loaded and saved as a unit. A date key's presence normally implies at
/// least one submission that day, but a bucket left empty by legacy data is
/// tolerated on load; it simply has no eligible users for sampling.
pub type Store = BTreeMap<String, DateBucket>;
