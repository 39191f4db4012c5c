//! Serialization boundary for calendar dates.

use chrono::NaiveDate;

use crate::error::FormatError;

/// Format used for persisted plan keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).map_err(|source| FormatError::InvalidDate {
        key: key.to_string(),
        source,
    })
}
