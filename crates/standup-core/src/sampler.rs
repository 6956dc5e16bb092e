//! Two-stage uniform random selection over windowed submissions.
//!
//! Stage one picks a date uniformly among windowed dates with at least one
//! submitter; stage two picks a user uniformly within that date's bucket.
//! Because the date is picked first, users on sparsely-populated dates are
//! favored relative to a flat pool of all (date, user) pairs. That bias is
//! intentional and matches the observable selection odds the group is used
//! to; switching to flat-pool sampling would silently change them.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use crate::model::{Store, Submission};

/// One randomly selected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub date: String,
    pub user: String,
    pub submission: Submission,
}

/// Sample one (date, user, submission) triple from the windowed dates.
///
/// Returns `None` when there is nothing to sample: the window is empty, or
/// every windowed bucket has zero users. That is a normal empty-result
/// signal, not an error. The randomness source is injected so callers can
/// seed it deterministically.
pub fn sample<R: Rng>(store: &Store, windowed: &BTreeSet<String>, rng: &mut R) -> Option<Pick> {
    let eligible: Vec<&String> = windowed
        .iter()
        .filter(|date| store.get(*date).is_some_and(|bucket| !bucket.is_empty()))
        .collect();

    let date = (*eligible.choose(rng)?).clone();
    let bucket = store.get(&date)?;

    let users: Vec<&String> = bucket.keys().collect();
    let user = (*users.choose(rng)?).clone();
    let submission = bucket.get(&user)?.clone();

    Some(Pick {
        date,
        user,
        submission,
    })
}
