//! Due-date parsing and formatting
//!
//! Due dates are calendar dates. Any time-of-day in the input is dropped,
//! so `2024-03-01T18:30:00` and `2024-03-01` name the same day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only wire format, also used for the calendar `start` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a due date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, naive date-times (`T` or space separated) and
/// RFC 3339 timestamps. An offset timestamp keeps the date as written.
pub fn parse_due_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Format a due date as `YYYY-MM-DD`.
pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
