mod date_key;
mod engine;
mod session;

pub use date_key::{format_date_key, parse_date_key, DATE_KEY_FORMAT};
pub use engine::{PersistedPlan, ScheduleEngine, ScheduleIndex};
pub use session::{review_label, ReviewEntry, StudySession, CRAM_SUFFIX, REVIEW_OFFSETS};
