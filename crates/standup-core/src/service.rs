//! Submission service: the one surface external front ends call.
//!
//! Orchestrates upsert-by-(date, user) plus the two moderator reads, random
//! pick and windowed history. The moderator capability check happens in the
//! caller before these are invoked; the service holds no ambient session
//! state and every operation takes its clock input explicitly.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::error::{Result, ValidationError};
use crate::model::{DateBucket, DATE_FORMAT, TIME_FORMAT};
use crate::sampler::{sample, Pick};
use crate::storage::RecordStore;
use crate::window::window;

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub date: String,
    pub user: String,
    pub submitted_at: String,
}

/// Request/response facade over the record store.
pub struct SubmissionService {
    store: RecordStore,
}

impl SubmissionService {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }

    /// Record `user`'s report for `now`'s calendar date, replacing any
    /// earlier report from the same user on the same date.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] when any field is empty
    /// after trimming; the fill-all-fields rule lives here so the core is
    /// testable without a front end. Store failures propagate as-is.
    pub fn submit(
        &self,
        user: &str,
        progress: &str,
        question: &str,
        now: DateTime<Utc>,
    ) -> Result<Ack> {
        let user = non_empty("user", user)?;
        let progress = non_empty("progress", progress)?;
        let question = non_empty("question", question)?;

        let date = now.format(DATE_FORMAT).to_string();
        let submitted_at = now.format(TIME_FORMAT).to_string();

        self.store
            .upsert(&date, user, progress, question, &submitted_at)?;

        Ok(Ack {
            date,
            user: user.to_string(),
            submitted_at,
        })
    }

    /// Pick one submission uniformly at random (date first, then user)
    /// from the last `days` days. `Ok(None)` means nothing to sample.
    ///
    /// # Errors
    ///
    /// Propagates store load failures.
    pub fn pick_random<R: Rng>(
        &self,
        days: u32,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Option<Pick>> {
        let store = self.store.load()?;
        let windowed = window(&store, days, now.date_naive());
        Ok(sample(&store, &windowed, rng))
    }

    /// All buckets within the last `days` days, most recent date first.
    /// Descending string sort is correct because date keys are zero-padded.
    ///
    /// # Errors
    ///
    /// Propagates store load failures.
    pub fn history(&self, days: u32, now: DateTime<Utc>) -> Result<Vec<(String, DateBucket)>> {
        let store = self.store.load()?;
        let windowed = window(&store, days, now.date_naive());

        Ok(windowed
            .into_iter()
            .rev()
            .filter_map(|date| {
                let bucket = store.get(&date)?.clone();
                Some((date, bucket))
            })
            .collect())
    }
}

fn non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::storage::MemoryBackend;
    use chrono::NaiveDateTime;
    use rand::SeedableRng;
    use rand_pcg::Mcg128Xsl64;

    fn service() -> SubmissionService {
        SubmissionService::new(RecordStore::with_backend(Box::new(MemoryBackend::new())))
    }

    fn at(date: &str, time: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S")
            .unwrap()
            .and_utc()
    }

    #[test]
    fn submit_records_under_todays_date() {
        let svc = service();
        let ack = svc
            .submit("alice", "wrote intro", "which dataset?", at("2024-06-10", "09:15:00"))
            .unwrap();

        assert_eq!(ack.date, "2024-06-10");
        assert_eq!(ack.user, "alice");
        assert_eq!(ack.submitted_at, "09:15:00");

        let history = svc.history(0, at("2024-06-10", "10:00:00")).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].1["alice"].progress, "wrote intro");
    }

    #[test]
    fn submit_trims_all_fields() {
        let svc = service();
        let ack = svc
            .submit("  alice  ", "  p  ", "  q  ", at("2024-06-10", "09:00:00"))
            .unwrap();
        assert_eq!(ack.user, "alice");

        let history = svc.history(0, at("2024-06-10", "10:00:00")).unwrap();
        let sub = &history[0].1["alice"];
        assert_eq!(sub.progress, "p");
        assert_eq!(sub.question, "q");
    }

    #[test]
    fn submit_rejects_blank_fields() {
        let svc = service();
        let now = at("2024-06-10", "09:00:00");

        for (user, progress, question, field) in [
            ("   ", "p", "q", "user"),
            ("alice", "", "q", "progress"),
            ("alice", "p", "  ", "question"),
        ] {
            match svc.submit(user, progress, question, now) {
                Err(CoreError::Validation(ValidationError::EmptyField { field: f })) => {
                    assert_eq!(f, field)
                }
                other => panic!("expected EmptyField for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn resubmission_same_day_overwrites() {
        let svc = service();
        svc.submit("alice", "draft", "q1", at("2024-06-10", "09:00:00"))
            .unwrap();
        svc.submit("alice", "final", "q2", at("2024-06-10", "17:30:00"))
            .unwrap();

        let history = svc.history(0, at("2024-06-10", "18:00:00")).unwrap();
        let bucket = &history[0].1;
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket["alice"].progress, "final");
        assert_eq!(bucket["alice"].submitted_at, "17:30:00");
    }

    #[test]
    fn pick_random_over_empty_window_is_none() {
        let svc = service();
        svc.submit("alice", "p", "q", at("2024-05-01", "09:00:00"))
            .unwrap();

        let mut rng = Mcg128Xsl64::seed_from_u64(1);
        let pick = svc
            .pick_random(7, at("2024-06-10", "12:00:00"), &mut rng)
            .unwrap();
        assert!(pick.is_none());
    }

    #[test]
    fn pick_random_returns_a_windowed_submission() {
        let svc = service();
        svc.submit("alice", "p", "q", at("2024-06-09", "09:00:00"))
            .unwrap();
        svc.submit("bob", "p", "q", at("2024-06-10", "09:00:00"))
            .unwrap();

        let mut rng = Mcg128Xsl64::seed_from_u64(2);
        let pick = svc
            .pick_random(7, at("2024-06-10", "12:00:00"), &mut rng)
            .unwrap()
            .unwrap();
        assert!(pick.user == "alice" || pick.user == "bob");
    }

    #[test]
    fn history_is_most_recent_first() {
        let svc = service();
        svc.submit("alice", "p", "q", at("2024-06-08", "09:00:00"))
            .unwrap();
        svc.submit("bob", "p", "q", at("2024-06-10", "09:00:00"))
            .unwrap();
        svc.submit("carol", "p", "q", at("2024-06-09", "09:00:00"))
            .unwrap();

        let history = svc.history(7, at("2024-06-10", "12:00:00")).unwrap();
        let dates: Vec<&str> = history.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-10", "2024-06-09", "2024-06-08"]);
    }

    #[test]
    fn history_excludes_dates_outside_window() {
        let svc = service();
        svc.submit("alice", "p", "q", at("2024-06-02", "09:00:00"))
            .unwrap();
        svc.submit("bob", "p", "q", at("2024-06-03", "09:00:00"))
            .unwrap();

        let history = svc.history(7, at("2024-06-10", "12:00:00")).unwrap();
        let dates: Vec<&str> = history.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(dates, vec!["2024-06-03"]);
    }
}
