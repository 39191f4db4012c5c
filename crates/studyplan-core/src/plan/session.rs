use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Review offsets in days after the start date, in planning order.
pub const REVIEW_OFFSETS: [u64; 5] = [1, 2, 3, 5, 7];

/// Suffix appended to the label of the first (cram) review.
pub const CRAM_SUFFIX: &str = " (Cram)";

/// A single scheduled review of one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub date: NaiveDate,
    pub label: String,
}

/// All reviews produced by one planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub subject: String,
    pub entries: Vec<ReviewEntry>,
}

impl StudySession {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            entries: Vec::with_capacity(REVIEW_OFFSETS.len()),
        }
    }

    pub fn add_entry(&mut self, date: NaiveDate, label: impl Into<String>) {
        self.entries.push(ReviewEntry {
            date,
            label: label.into(),
        });
    }
}

/// Label for the review at `offset_index` within a session.
pub fn review_label(subject: &str, offset_index: usize) -> String {
    if offset_index == 0 {
        format!("{subject}{CRAM_SUFFIX}")
    } else {
        subject.to_string()
    }
}
