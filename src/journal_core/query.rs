//! Filtering of entry sequences by date, range, keyword, tag and field key.
//!
//! Every filter is a pure read: it returns the matching entries in their
//! original relative order and never touches the source. An empty source, or
//! a query with no values to match, yields an empty result.

use crate::journal_core::entry::Entry;
use crate::journal_core::resolver::Precision;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Calendar components of an instant kept at a given precision.
type Truncated = (i32, Option<u32>, Option<u32>, Option<(u32, u32)>);

fn truncate(instant: NaiveDateTime, precision: Precision) -> Option<Truncated> {
    let year = instant.year();
    let month = Some(instant.month());
    let day = Some(instant.day());
    match precision {
        Precision::Year => Some((year, None, None, None)),
        Precision::Month => Some((year, month, None, None)),
        Precision::Day => Some((year, month, day, None)),
        Precision::Exact => Some((year, month, day, Some((instant.hour(), instant.minute())))),
        Precision::Unresolved => None,
    }
}

/// Whether two instants agree on every component down to `precision`.
///
/// `Precision::Unresolved` carries no calendar information and never matches.
pub fn same_at(a: NaiveDateTime, b: NaiveDateTime, precision: Precision) -> bool {
    match (truncate(a, precision), truncate(b, precision)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Same calendar day, whatever the time of day.
pub fn same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    same_at(a, b, Precision::Day)
}

pub fn same_month(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    same_at(a, b, Precision::Month)
}

pub fn same_year(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    same_at(a, b, Precision::Year)
}

/// Same day, hour and minute.
pub fn same_minute(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    same_at(a, b, Precision::Exact)
}

/// `start < current < end`. Both bounds are exclusive.
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::journal_core::date_between;
///
/// let d = NaiveDate::from_ymd_opt(2023, 4, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// assert!(!date_between(d, d, d));
/// ```
pub fn date_between(current: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
    start < current && current < end
}

/// A predicate over entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Every entry.
    All,
    /// Entries falling on the same year, month, day or minute as `instant`.
    OnDate {
        instant: NaiveDateTime,
        precision: Precision,
    },
    /// Entries strictly between two instants.
    Between {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Entries whose content contains any of the keywords (case-sensitive).
    Keywords(Vec<String>),
    /// Entries carrying any of the tags exactly.
    Tags(Vec<String>),
    /// Entries with a field under any of the keys.
    FieldKeys(Vec<String>),
}

impl Query {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Query::All => true,
            Query::OnDate { instant, precision } => {
                same_at(entry.resolved_time(), *instant, *precision)
            }
            Query::Between { start, end } => date_between(entry.resolved_time(), *start, *end),
            Query::Keywords(keywords) => keywords
                .iter()
                .any(|keyword| entry.content().contains(keyword.as_str())),
            Query::Tags(tags) => entry.tags().iter().any(|tag| tags.contains(tag)),
            Query::FieldKeys(keys) => entry.fields().iter().any(|field| keys.contains(&field.key)),
        }
    }
}

/// Returns the entries matching `query`, in their original order.
pub fn filter_entries<'a>(entries: &'a [Entry], query: &Query) -> Vec<&'a Entry> {
    entries.iter().filter(|entry| query.matches(entry)).collect()
}
