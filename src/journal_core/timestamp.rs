//! The canonical `YYYY-MM-DD, HH:MM` timestamp shared by display and storage.

use crate::constants::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;

/// Formats an instant in the canonical 24-hour format.
///
/// Seconds are never part of the canonical form.
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::journal_core::format_timestamp;
///
/// let instant = NaiveDate::from_ymd_opt(2023, 4, 15)
///     .unwrap()
///     .and_hms_opt(21, 5, 59)
///     .unwrap();
/// assert_eq!(format_timestamp(instant), "2023-04-15, 21:05");
/// ```
pub fn format_timestamp(instant: NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a timestamp written in the canonical format, and nothing else.
pub fn parse_timestamp(timestamp: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)
}
