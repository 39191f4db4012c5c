//! Text summary and calendar marks derived from a schedule snapshot.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

use crate::density::{density_color, DensityColor};

/// Default heading format, e.g. `Tuesday, January 02, 2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Separator between labels on a calendar mark.
pub const MARK_SEPARATOR: &str = ", ";

/// One highlighted calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMark {
    pub date: NaiveDate,
    pub text: String,
    pub count: usize,
    pub background: DensityColor,
    pub foreground: DensityColor,
}

/// Whether `format` is a strftime pattern chrono can render.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Render the per-date summary, one heading per date followed by its labels.
pub fn render_summary(snapshot: &[(NaiveDate, &[String])], date_format: &str) -> String {
    let mut out = String::new();
    for (date, labels) in snapshot {
        // Config::load_from and Config::set reject formats that would fail here.
        let _ = writeln!(out, "{}:", date.format(date_format));
        for label in labels.iter() {
            let _ = writeln!(out, "  - {label}");
        }
    }
    out
}

pub fn calendar_marks(snapshot: &[(NaiveDate, &[String])]) -> Vec<CalendarMark> {
    snapshot
        .iter()
        .map(|(date, labels)| {
            let (background, foreground) = density_color(labels.len());
            CalendarMark {
                date: *date,
                text: labels.join(MARK_SEPARATOR),
                count: labels.len(),
                background,
                foreground,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ScheduleEngine;

    fn planned() -> ScheduleEngine {
        let mut engine = ScheduleEngine::new();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        engine.plan("Math", start).unwrap();
        engine.plan("Physics", start).unwrap();
        engine
    }

    #[test]
    fn summary_lists_dates_then_labels() {
        let engine = planned();
        let text = render_summary(&engine.snapshot(), DEFAULT_DATE_FORMAT);
        assert!(text.starts_with(
            "Tuesday, January 02, 2024:\n  - Math (Cram)\n  - Physics (Cram)\n"
        ));
        assert!(text.ends_with("Monday, January 08, 2024:\n  - Math\n  - Physics\n"));
        assert_eq!(text.lines().count(), 5 * 3);
    }

    #[test]
    fn summary_honors_custom_format() {
        let engine = planned();
        let text = render_summary(&engine.snapshot(), "%Y-%m-%d");
        assert!(text.starts_with("2024-01-02:\n"));
    }

    #[test]
    fn date_format_validation() {
        assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
        assert!(is_valid_date_format("%d/%m"));
        assert!(!is_valid_date_format("%Q"));
    }

    #[test]
    fn empty_snapshot_renders_nothing() {
        assert_eq!(render_summary(&[], DEFAULT_DATE_FORMAT), "");
        assert!(calendar_marks(&[]).is_empty());
    }

    #[test]
    fn marks_join_labels_and_color_by_count() {
        let engine = planned();
        let marks = calendar_marks(&engine.snapshot());
        assert_eq!(marks.len(), 5);
        assert_eq!(marks[0].text, "Math (Cram), Physics (Cram)");
        assert_eq!(marks[0].count, 2);
        assert_eq!(marks[0].background, DensityColor::Orange);
        assert_eq!(marks[0].foreground, DensityColor::Black);
    }
}
