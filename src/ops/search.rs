//! Keyword, tag and field searches over the journal.

use crate::cli::SearchKind;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{Entry, Journal, Query};
use tracing::{debug, info};

/// Finds the entries matching any of `values`.
///
/// Values are trimmed and blank values are ignored. Keywords match as
/// case-sensitive substrings of the content; tags and field names must match
/// exactly.
///
/// # Errors
///
/// Returns `AppError::Journal` if no non-blank value was given.
pub fn search_entries<'a>(
    journal: &'a Journal,
    kind: SearchKind,
    values: &[String],
) -> AppResult<Vec<&'a Entry>> {
    let values: Vec<String> = values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        return Err(AppError::Journal(
            "Search needs at least one non-empty value".to_string(),
        ));
    }

    debug!("Searching {:?} for {:?}", kind, values);
    let query = match kind {
        SearchKind::Keywords => Query::Keywords(values),
        SearchKind::Tags => Query::Tags(values),
        SearchKind::Fields => Query::FieldKeys(values),
    };

    let found = journal.query(&query);
    info!("Search matched {} of {} entries", found.len(), journal.len());
    Ok(found)
}
