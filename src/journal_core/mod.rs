//! Core journal functionality without I/O operations.
//!
//! This module contains the pure logic of daybook: normalizing free text,
//! resolving leading date expressions against a supplied "now", building
//! entries, and filtering them. Nothing here reads the clock, touches the
//! filesystem or logs; callers pass the current time in and receive values
//! back.

pub mod entry;
pub mod journal;
pub mod query;
pub mod resolver;
pub mod timestamp;
pub mod tokenizer;

pub use entry::{build_entry, Entry, Field};
pub use journal::Journal;
pub use query::{
    date_between, filter_entries, same_at, same_day, same_minute, same_month, same_year, Query,
};
pub use resolver::{
    parse_time_of_day, resolve_date, DateParsePolicy, DateResolution, Precision, ResolvedDate,
};
pub use timestamp::{format_timestamp, parse_timestamp};
pub use tokenizer::{normalize, remainder, tokenize};
