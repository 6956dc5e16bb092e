//! Rolling time-window computation over the store's date keys.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

use crate::model::{Store, DATE_FORMAT};

/// Returns every date key in `store` within the last `days` days of
/// `reference`, inclusive on both ends: a closed interval of `days + 1`
/// calendar days ending at `reference`. `days = 0` yields at most the
/// reference date itself.
///
/// Keys that do not parse as `YYYY-MM-DD` are skipped, never an error;
/// legacy files have been seen with stray keys and windowing must shrug
/// them off. Pure function of the snapshot, no side effects.
pub fn window(store: &Store, days: u32, reference: NaiveDate) -> BTreeSet<String> {
    let earliest = reference - Duration::days(i64::from(days));

    store
        .keys()
        .filter(|key| {
            NaiveDate::parse_from_str(key, DATE_FORMAT)
                .map(|date| date >= earliest && date <= reference)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
