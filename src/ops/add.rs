//! Adding journal entries.

use crate::errors::{AppError, AppResult};
use crate::journal_core::{
    build_entry, normalize, parse_time_of_day, remainder, resolve_date, tokenize,
    DateParsePolicy, Entry, Journal, Precision,
};
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// Adds an entry built from free text to the journal.
///
/// # Flow
///
/// 1. Collapse repeated spaces and split the text into tokens
/// 2. Resolve a leading date, applying `policy` when there is none
/// 3. Apply `time` (`HH.MM`) to the resolved day or the fallback now, if given
/// 4. Build the entry from the remaining text and trim its tags
/// 5. Append it to the journal
///
/// # Errors
///
/// Returns `AppError::Journal` if:
/// - The text is empty
/// - The text has no leading date and `policy` is `Reject`
/// - Nothing but a date was given
/// - `time` is not a valid `HH.MM` time of day
/// - `time` is given for a month or a year rather than a day
pub fn add_entry<'a>(
    journal: &'a mut Journal,
    text: &str,
    time: Option<&str>,
    policy: DateParsePolicy,
    now: NaiveDateTime,
) -> AppResult<&'a Entry> {
    let normalized = normalize(text.trim());
    if normalized.is_empty() {
        return Err(AppError::Journal("Entry text cannot be empty".to_string()));
    }

    let tokens = tokenize(&normalized);
    let mut date = policy.apply(resolve_date(&tokens, now), now, &normalized)?;

    if let Some(time) = time {
        if matches!(date.precision, Precision::Month | Precision::Year) {
            return Err(AppError::Journal(format!(
                "A time can only be given for a specific day, not for '{}'",
                tokens.get(..date.consumed).unwrap_or_default().join(" ")
            )));
        }
        let time_of_day = parse_time_of_day(time).ok_or_else(|| {
            AppError::Journal(format!(
                "Invalid time '{}'. Use HH.MM in 24-hour format",
                time
            ))
        })?;
        date = date.at_time(time_of_day);
    }

    let text = remainder(&tokens, date.consumed);
    if text.trim().is_empty() {
        return Err(AppError::Journal(format!(
            "Entry for '{}' has no text",
            normalized
        )));
    }

    debug!(
        "Entry dated {} ({:?}), {} date token(s) consumed",
        date.instant, date.precision, date.consumed
    );

    journal.add(build_entry(&text, date.instant).with_trimmed_tags());
    let entry = journal
        .entries()
        .last()
        .ok_or_else(|| AppError::Journal("Entry was not added".to_string()))?;
    info!("Added entry for {}", entry.timestamp());
    Ok(entry)
}
