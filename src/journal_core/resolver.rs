//! Resolution of loosely formatted leading date tokens into instants.
//!
//! The resolver looks at the first token of an entry (and possibly a second,
//! time-of-day token) and decides which instant the user meant and how
//! precisely they said it. It never fails: text it does not recognise comes
//! back as [`DateResolution::Unresolved`] and the caller applies a
//! [`DateParsePolicy`] to decide what that means.

use crate::constants::{DATE_FORMAT_ISO, TIME_OF_DAY_FORMAT, TODAY_TOKEN, YESTERDAY_TOKEN};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

const WEEKDAY_NAMES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

/// How much of a resolved instant the user actually specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Day plus hour and minute.
    Exact,
    /// A calendar day; the time of day is incidental.
    Day,
    /// A calendar month.
    Month,
    /// A calendar year.
    Year,
    /// No date was given; the instant is the fallback "now".
    Unresolved,
}

/// A successfully resolved leading date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    /// The resolved instant. Midnight for bare dates, `now`'s time for relative days.
    pub instant: NaiveDateTime,
    /// Granularity the instant is known at.
    pub precision: Precision,
    /// Number of leading tokens that belonged to the date expression.
    pub consumed: usize,
}

impl ResolvedDate {
    /// Replaces the time of day, keeping the calendar day, and marks the result exact.
    pub fn at_time(self, time: NaiveTime) -> Self {
        ResolvedDate {
            instant: self.instant.date().and_time(time),
            precision: Precision::Exact,
            consumed: self.consumed,
        }
    }
}

/// Outcome of looking for a date at the start of some text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateResolution {
    /// The leading tokens named a date.
    Resolved(ResolvedDate),
    /// The first token is not a date; nothing was consumed.
    Unresolved,
}

/// What a caller wants done with [`DateResolution::Unresolved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateParsePolicy {
    /// Treat the whole input as free text dated `now`.
    #[default]
    FallbackToNow,
    /// Refuse input that does not start with a date.
    Reject,
}

impl DateParsePolicy {
    /// Turns a resolution into a concrete date according to this policy.
    ///
    /// `input` is only used to build the error message.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` when the resolution is `Unresolved` and the
    /// policy is `Reject`.
    pub fn apply(
        self,
        resolution: DateResolution,
        now: NaiveDateTime,
        input: &str,
    ) -> AppResult<ResolvedDate> {
        match (resolution, self) {
            (DateResolution::Resolved(date), _) => Ok(date),
            (DateResolution::Unresolved, DateParsePolicy::FallbackToNow) => Ok(ResolvedDate {
                instant: now,
                precision: Precision::Unresolved,
                consumed: 0,
            }),
            (DateResolution::Unresolved, DateParsePolicy::Reject) => {
                Err(AppError::Journal(format!(
                    "'{}' is not a recognised date. Use today, yesterday, a weekday name, YYYY-MM-DD, YYYY-MM or YYYY",
                    input
                )))
            }
        }
    }
}

/// Resolves the leading date expression of `tokens` against `now`.
///
/// The first token is tried, in order, as `yesterday`, `today`, `YYYY-MM-DD`,
/// `YYYY-MM`, `YYYY` and a full weekday name. When a whole day was resolved
/// and the second token is a 24-hour `HH.MM` time, that time replaces the
/// time of day and the result becomes [`Precision::Exact`].
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::journal_core::{resolve_date, DateResolution, Precision};
///
/// // A Wednesday afternoon.
/// let now = NaiveDate::from_ymd_opt(2023, 4, 19).unwrap().and_hms_opt(16, 0, 0).unwrap();
///
/// match resolve_date(&["monday", "14.30", "Dentist."], now) {
///     DateResolution::Resolved(date) => {
///         assert_eq!(date.instant.to_string(), "2023-04-17 14:30:00");
///         assert_eq!(date.precision, Precision::Exact);
///         assert_eq!(date.consumed, 2);
///     }
///     DateResolution::Unresolved => panic!("expected a date"),
/// }
/// ```
pub fn resolve_date(tokens: &[&str], now: NaiveDateTime) -> DateResolution {
    let Some(first) = tokens.first() else {
        return DateResolution::Unresolved;
    };

    let Some(date) = resolve_first_token(first, now) else {
        return DateResolution::Unresolved;
    };

    if date.precision == Precision::Day {
        if let Some(time) = tokens.get(1).and_then(|token| parse_time_of_day(token)) {
            return DateResolution::Resolved(ResolvedDate {
                consumed: 2,
                ..date.at_time(time)
            });
        }
    }

    DateResolution::Resolved(date)
}

/// Parses a 24-hour `HH.MM` time-of-day token; a single-digit hour is accepted.
pub fn parse_time_of_day(token: &str) -> Option<NaiveTime> {
    let (hour, minute) = token.split_once('.')?;
    if !is_digits(hour, 1..=2) || !is_digits(minute, 2..=2) {
        return None;
    }
    NaiveTime::parse_from_str(token, TIME_OF_DAY_FORMAT).ok()
}

fn resolve_first_token(token: &str, now: NaiveDateTime) -> Option<ResolvedDate> {
    let day = |instant| ResolvedDate {
        instant,
        precision: Precision::Day,
        consumed: 1,
    };

    if token == YESTERDAY_TOKEN {
        return Some(day(now - Duration::days(1)));
    }
    if token == TODAY_TOKEN {
        return Some(day(now));
    }
    if let Some(date) = parse_calendar_date(token) {
        return Some(date);
    }
    weekday_on_or_before(token, now).map(day)
}

/// Tries `YYYY-MM-DD`, then `YYYY-MM`, then `YYYY`.
fn parse_calendar_date(token: &str) -> Option<ResolvedDate> {
    let parts: Vec<&str> = token.split('-').collect();
    let shaped = |lengths: &[usize]| {
        parts.len() == lengths.len()
            && parts
                .iter()
                .zip(lengths)
                .all(|(part, &len)| is_digits(part, len..=len))
    };

    let (date, precision) = if shaped(&[4, 2, 2]) {
        (
            NaiveDate::parse_from_str(token, DATE_FORMAT_ISO).ok()?,
            Precision::Day,
        )
    } else if shaped(&[4, 2]) {
        let year = parts[0].parse().ok()?;
        let month = parts[1].parse().ok()?;
        (NaiveDate::from_ymd_opt(year, month, 1)?, Precision::Month)
    } else if shaped(&[4]) {
        let year = parts[0].parse().ok()?;
        (NaiveDate::from_ymd_opt(year, 1, 1)?, Precision::Year)
    } else {
        return None;
    };

    Some(ResolvedDate {
        instant: date.and_hms_opt(0, 0, 0)?,
        precision,
        consumed: 1,
    })
}

/// The latest instant at or before `now`, in whole days, falling on the named weekday.
fn weekday_on_or_before(token: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let target = WEEKDAY_NAMES
        .iter()
        .find(|(name, _)| token.eq_ignore_ascii_case(name))
        .map(|&(_, weekday)| weekday)?;

    let today = now.weekday().num_days_from_monday();
    let days_back = (today + 7 - target.num_days_from_monday()) % 7;
    Some(now - Duration::days(i64::from(days_back)))
}

fn is_digits(text: &str, lengths: std::ops::RangeInclusive<usize>) -> bool {
    lengths.contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}
