//! Spaced-repetition schedule engine.
//!
//! The engine owns the aggregate date -> labels index and the log of
//! sessions planned during its lifetime. Callers hold the engine and go
//! through its methods; persistence is handled by [`crate::storage::PlanStore`].

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use super::date_key::{format_date_key, parse_date_key};
use super::session::{review_label, StudySession, REVIEW_OFFSETS};
use crate::error::{FormatError, ValidationError};

/// Labels scheduled on each date, in the order they were planned.
pub type ScheduleIndex = BTreeMap<NaiveDate, Vec<String>>;

/// Persisted form of the index: `YYYY-MM-DD` keys.
pub type PersistedPlan = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default)]
pub struct ScheduleEngine {
    sessions: Vec<StudySession>,
    index: ScheduleIndex,
}

impl ScheduleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan reviews of `subject` starting from `start_date`.
    ///
    /// Produces one entry per offset in [`REVIEW_OFFSETS`]; the first is
    /// labelled as a cram session. Nothing is recorded if validation fails.
    pub fn plan(
        &mut self,
        subject: &str,
        start_date: NaiveDate,
    ) -> Result<StudySession, ValidationError> {
        if subject.is_empty() {
            tracing::warn!("rejected plan request with empty subject");
            return Err(ValidationError::EmptySubject);
        }

        let mut session = StudySession::new(subject);
        for (i, &offset) in REVIEW_OFFSETS.iter().enumerate() {
            let date = start_date
                .checked_add_days(Days::new(offset))
                .ok_or(ValidationError::DateOutOfRange {
                    start: start_date,
                    offset,
                })?;
            session.add_entry(date, review_label(subject, i));
        }

        for entry in &session.entries {
            self.index
                .entry(entry.date)
                .or_default()
                .push(entry.label.clone());
        }
        self.sessions.push(session.clone());

        tracing::debug!(
            subject,
            start = %start_date,
            dates = self.index.len(),
            "planned review session"
        );
        Ok(session)
    }

    /// Index entries in ascending date order.
    pub fn snapshot(&self) -> Vec<(NaiveDate, &[String])> {
        self.index
            .iter()
            .map(|(date, labels)| (*date, labels.as_slice()))
            .collect()
    }

    /// Forget every session and scheduled date.
    pub fn clear(&mut self) {
        self.sessions.clear();
        self.index.clear();
        tracing::debug!("cleared schedule");
    }

    pub fn serialize(&self) -> PersistedPlan {
        self.index
            .iter()
            .map(|(date, labels)| (format_date_key(*date), labels.clone()))
            .collect()
    }

    /// Replace the index with a persisted plan.
    ///
    /// Every key is parsed before anything is replaced, so a bad key leaves
    /// the engine as it was. Session history is not rebuilt. When two keys
    /// name the same date (`2024-1-2` and `2024-01-02`), the later one wins.
    pub fn deserialize<I, K>(&mut self, data: I) -> Result<(), FormatError>
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: AsRef<str>,
    {
        let mut index = ScheduleIndex::new();
        for (key, labels) in data {
            let date = parse_date_key(key.as_ref())?;
            index.insert(date, labels);
        }
        tracing::debug!(dates = index.len(), "replaced schedule index");
        self.index = index;
        Ok(())
    }

    /// Sessions planned since the engine was created or last cleared.
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    pub fn labels_on(&self, date: NaiveDate) -> &[String] {
        self.index.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn index(&self) -> &ScheduleIndex {
        &self.index
    }

    /// Number of dates with at least one review.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn plan_produces_five_offset_entries() {
        let mut engine = ScheduleEngine::new();
        let session = engine.plan("Math", ymd(2024, 1, 1)).unwrap();

        let got: Vec<_> = session
            .entries
            .iter()
            .map(|e| (e.date, e.label.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (ymd(2024, 1, 2), "Math (Cram)"),
                (ymd(2024, 1, 3), "Math"),
                (ymd(2024, 1, 4), "Math"),
                (ymd(2024, 1, 6), "Math"),
                (ymd(2024, 1, 8), "Math"),
            ]
        );
        assert_eq!(engine.sessions().len(), 1);
        assert_eq!(engine.len(), 5);
    }

    #[test]
    fn plans_merge_in_call_order() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        engine.plan("Physics", ymd(2024, 1, 1)).unwrap();

        assert_eq!(
            engine.labels_on(ymd(2024, 1, 2)),
            ["Math (Cram)", "Physics (Cram)"]
        );
        assert_eq!(engine.labels_on(ymd(2024, 1, 8)), ["Math", "Physics"]);
        assert!(engine.labels_on(ymd(2024, 1, 5)).is_empty());
    }

    #[test]
    fn overlapping_starts_stack_on_shared_dates() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        engine.plan("Chem", ymd(2024, 1, 2)).unwrap();

        // Math day 2 and Chem cram both land on Jan 3.
        assert_eq!(engine.labels_on(ymd(2024, 1, 3)), ["Math", "Chem (Cram)"]);
    }

    #[test]
    fn empty_subject_is_rejected_without_mutation() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        let before = engine.serialize();

        assert_eq!(
            engine.plan("", ymd(2024, 1, 1)),
            Err(ValidationError::EmptySubject)
        );
        assert_eq!(engine.serialize(), before);
        assert_eq!(engine.sessions().len(), 1);
    }

    #[test]
    fn subject_is_used_verbatim() {
        let mut engine = ScheduleEngine::new();
        let session = engine.plan(" Math", ymd(2024, 1, 1)).unwrap();
        assert_eq!(session.subject, " Math");
        assert_eq!(session.entries[0].label, " Math (Cram)");
        assert_eq!(session.entries[1].label, " Math");

        // Only the empty string is rejected.
        let session = engine.plan("   ", ymd(2024, 1, 1)).unwrap();
        assert_eq!(session.entries[0].label, "    (Cram)");
        assert_eq!(engine.sessions().len(), 2);
    }

    #[test]
    fn overflowing_start_date_is_rejected() {
        let mut engine = ScheduleEngine::new();
        let err = engine.plan("Math", NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, ValidationError::DateOutOfRange { offset: 1, .. }));
        assert!(engine.is_empty());
        assert!(engine.sessions().is_empty());
    }

    #[test]
    fn clear_empties_everything_and_is_idempotent() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        engine.clear();
        assert!(engine.snapshot().is_empty());
        assert!(engine.sessions().is_empty());
        engine.clear();
        assert!(engine.snapshot().is_empty());
    }

    #[test]
    fn serialize_uses_iso_keys() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        let data = engine.serialize();

        assert_eq!(data["2024-01-02"], vec!["Math (Cram)".to_string()]);
        assert_eq!(data["2024-01-08"], vec!["Math".to_string()]);
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn deserialize_replaces_index_but_keeps_sessions() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();

        let mut data = PersistedPlan::new();
        data.insert("2025-03-01".into(), vec!["Bio".into()]);
        engine.deserialize(data).unwrap();

        assert_eq!(engine.len(), 1);
        assert_eq!(engine.labels_on(ymd(2025, 3, 1)), ["Bio"]);
        assert_eq!(engine.sessions().len(), 1);
    }

    #[test]
    fn deserialize_bad_key_leaves_index_unchanged() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        let before = engine.serialize();

        let data = vec![
            ("2024-05-01", vec!["Ok".to_string()]),
            ("not-a-date", vec!["X".to_string()]),
        ];
        let err = engine.deserialize(data).unwrap_err();

        assert!(err.to_string().contains("not-a-date"));
        assert_eq!(engine.serialize(), before);
    }

    #[test]
    fn deserialize_same_date_keeps_last_key() {
        let mut engine = ScheduleEngine::new();
        let data = vec![
            ("2024-1-2", vec!["Old".to_string()]),
            ("2024-01-02", vec!["New".to_string()]),
        ];
        engine.deserialize(data).unwrap();

        assert_eq!(engine.len(), 1);
        assert_eq!(engine.labels_on(ymd(2024, 1, 2)), ["New"]);
    }

    #[test]
    fn roundtrip_preserves_index() {
        let mut engine = ScheduleEngine::new();
        engine.plan("Math", ymd(2024, 1, 1)).unwrap();
        engine.plan("Physics", ymd(2024, 1, 4)).unwrap();

        let mut reloaded = ScheduleEngine::new();
        reloaded.deserialize(engine.serialize()).unwrap();
        assert_eq!(reloaded.index(), engine.index());
    }

    proptest! {
        #[test]
        fn plan_offsets_hold_for_any_subject(
            subject in "[A-Za-z][A-Za-z0-9 ]{0,20}",
            days in 0i64..200_000,
        ) {
            let start = ymd(1900, 1, 1) + chrono::Duration::days(days);
            let mut engine = ScheduleEngine::new();
            let session = engine.plan(&subject, start).unwrap();

            prop_assert_eq!(session.entries.len(), 5);
            for (entry, offset) in session.entries.iter().zip(REVIEW_OFFSETS) {
                prop_assert_eq!((entry.date - start).num_days(), offset as i64);
            }
            prop_assert_eq!(&session.entries[0].label, &format!("{subject} (Cram)"));
            for entry in &session.entries[1..] {
                prop_assert_eq!(entry.label.as_str(), subject.as_str());
            }
        }

        #[test]
        fn snapshot_is_sorted_for_any_insertion_order(
            starts in proptest::collection::vec(0i64..3_000, 1..12),
        ) {
            let base = ymd(2020, 1, 1);
            let mut engine = ScheduleEngine::new();
            for (i, offset) in starts.iter().enumerate() {
                engine
                    .plan(&format!("S{i}"), base + chrono::Duration::days(*offset))
                    .unwrap();
            }
            let snapshot = engine.snapshot();
            prop_assert!(snapshot.windows(2).all(|w| w[0].0 < w[1].0));
            let total: usize = snapshot.iter().map(|(_, labels)| labels.len()).sum();
            prop_assert_eq!(total, starts.len() * REVIEW_OFFSETS.len());
        }
    }
}
