//! Read adapter for the historical per-day flat-text report files.
//!
//! Before the structured store existed, each meeting day was a flat text
//! file named `MMDD.md` with line-prefixed records:
//!
//! ```text
//! 同学: 王磊
//! *进度: 完成了数据清洗
//! *问题: 聚类结果不稳定
//! ```
//!
//! Lines are scanned top to bottom and grouped under the most recent name
//! marker. This format is read-only historical data; the core never writes
//! it. The structured JSON store is authoritative, so the one-time import
//! keeps any structured entry that already exists for a (date, user) key.

use chrono::NaiveDate;
use std::path::Path;

use crate::error::CoreError;
use crate::model::{Submission, DATE_FORMAT};
use crate::storage::RecordStore;

const NAME_MARKER: &str = "同学:";
const PROGRESS_MARKER: &str = "*进度:";
const QUESTION_MARKER: &str = "*问题:";

/// Time of day recorded on imported submissions; the flat files carry none.
const IMPORT_TIME: &str = "00:00:00";

/// One member's record parsed out of a flat-text day file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyEntry {
    pub name: String,
    pub progress: Vec<String>,
    pub questions: Vec<String>,
}

/// Parse one day file's contents into per-member entries.
///
/// Progress and question lines before the first name marker have no owner
/// and are dropped. Unrecognized lines are ignored.
pub fn parse_day(content: &str) -> Vec<LegacyEntry> {
    let mut entries: Vec<LegacyEntry> = Vec::new();
    let mut current: Option<LegacyEntry> = None;

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix(NAME_MARKER) {
            if let Some(entry) = current.take() {
                entries.push(entry);
            }
            current = Some(LegacyEntry {
                name: rest.trim().to_string(),
                progress: Vec::new(),
                questions: Vec::new(),
            });
        } else if let Some(rest) = line.strip_prefix(PROGRESS_MARKER) {
            if let Some(entry) = current.as_mut() {
                entry.progress.push(rest.trim().to_string());
            }
        } else if let Some(rest) = line.strip_prefix(QUESTION_MARKER) {
            if let Some(entry) = current.as_mut() {
                entry.questions.push(rest.trim().to_string());
            }
        }
    }
    if let Some(entry) = current.take() {
        entries.push(entry);
    }

    entries
}

/// Derive the store date key from a legacy file name like `0307.md`.
///
/// The files carry no year, so the caller supplies one. Names that are not
/// a valid four-digit month-day are skipped by returning `None`.
pub fn date_from_filename(name: &str, year: i32) -> Option<String> {
    let stem = name.split('.').next()?;
    if stem.len() != 4 || !stem.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let month: u32 = stem[..2].parse().ok()?;
    let day: u32 = stem[2..].parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.format(DATE_FORMAT).to_string())
}

/// One-time migration of a directory of legacy day files into the store.
///
/// Returns how many submissions were imported. Entries already present in
/// the structured store for the same (date, user) are left untouched. Files
/// whose names do not parse as dates are skipped.
///
/// # Errors
///
/// Fails on unreadable files or on store load/save failures.
pub fn import_dir(dir: &Path, year: i32, store: &RecordStore) -> Result<usize, CoreError> {
    let mut days: Vec<(String, Vec<LegacyEntry>)> = Vec::new();

    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type()?.is_file() {
            continue;
        }
        let file_name = dir_entry.file_name().to_string_lossy().into_owned();
        let Some(date) = date_from_filename(&file_name, year) else {
            continue;
        };
        let content = std::fs::read_to_string(dir_entry.path())?;
        days.push((date, parse_day(&content)));
    }

    let imported = store.update(|data| {
        let mut imported = 0usize;
        for (date, entries) in days {
            for entry in entries {
                let bucket = data.entry(date.clone()).or_default();
                if bucket.contains_key(&entry.name) {
                    continue;
                }
                bucket.insert(
                    entry.name,
                    Submission {
                        progress: entry.progress.join("\n"),
                        question: entry.questions.join("\n"),
                        submitted_at: IMPORT_TIME.to_string(),
                    },
                );
                imported += 1;
            }
        }
        imported
    })?;

    Ok(imported)
}
