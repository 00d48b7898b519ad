//! Viewing the entries on a date or in a range.

use crate::journal_core::{Entry, Journal, Query};
use tracing::info;

/// Returns the entries selected by `query`, in journal order.
pub fn view_entries<'a>(journal: &'a Journal, query: &Query) -> Vec<&'a Entry> {
    let found = journal.query(query);
    info!("Showing {} of {} entries", found.len(), journal.len());
    found
}
