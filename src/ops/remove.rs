//! Removing entries.

use crate::journal_core::{Journal, Query};
use tracing::info;

/// Removes the entries selected by `query` and returns how many were removed.
///
/// `Query::All` empties the journal.
pub fn remove_entries(journal: &mut Journal, query: &Query) -> usize {
    let removed = match query {
        Query::All => journal.clear(),
        query => journal.remove(query),
    };
    info!("Removed {} entries, {} left", removed, journal.len());
    removed
}
