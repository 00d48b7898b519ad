//! High-level operations behind each daybook command.
//!
//! Every invocation loads the journal from an [`EntryStore`], runs exactly one
//! operation against it, and writes it back only when the operation changed
//! something. Operations return the text to print; they never print
//! themselves.

pub mod add;
pub mod dates;
pub mod remove;
pub mod search;
pub mod view;

pub use add::add_entry;
pub use dates::{resolve_argument, selection_query};
pub use remove::remove_entries;
pub use search::search_entries;
pub use view::view_entries;

use crate::cli::Command;
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal_core::Journal;
use crate::journal_io::EntryStore;
use crate::output::{render_entries, render_fields, render_tag_counts};
use chrono::NaiveDateTime;
use tracing::debug;

/// Runs one command against the journal held by `store`.
///
/// `now` is the single reference instant for every relative date in the
/// command.
///
/// # Errors
///
/// Returns an error if loading or saving the journal fails, or if the
/// command's arguments are invalid.
pub fn run<S: EntryStore>(
    command: &Command,
    store: &S,
    config: &Config,
    now: NaiveDateTime,
) -> AppResult<String> {
    let mut journal = Journal::from_entries(store.load_all()?);

    match command {
        Command::Add(args) => {
            let message = {
                let entry = add_entry(
                    &mut journal,
                    &args.joined_text(),
                    args.time.as_deref(),
                    config.date_policy,
                    now,
                )?;
                format!("Added \"{}\" at {}\n", entry.title(), entry.timestamp())
            };
            persist(store, &journal)?;
            Ok(message)
        }
        Command::Remove(selection) => {
            let query = selection_query(selection, now)?;
            let removed = remove_entries(&mut journal, &query);
            if removed > 0 {
                persist(store, &journal)?;
            }
            Ok(format!(
                "Removed {} {}\n",
                removed,
                if removed == 1 { "entry" } else { "entries" }
            ))
        }
        Command::View { selection, output } => {
            let query = selection_query(selection, now)?;
            render_entries(&view_entries(&journal, &query), output.mode())
        }
        Command::Search(args) => {
            let found = search_entries(&journal, args.kind(), &args.values)?;
            render_entries(&found, args.output.mode())
        }
        Command::Tags => Ok(render_tag_counts(&journal.tag_counts())),
        Command::Fields => Ok(render_fields(&journal.fields())),
    }
}

fn persist<S: EntryStore>(store: &S, journal: &Journal) -> AppResult<()> {
    debug!("Persisting journal after change");
    store.save_all(journal.entries())
}
