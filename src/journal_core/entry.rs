//! The immutable journal entry and the builder that derives one from free text.

use crate::constants::{FIELD_SEPARATOR, TAG_MARKER, TITLE_DELIMITERS};
use crate::journal_core::timestamp::{format_timestamp, parse_timestamp};
use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A structured `key=value` annotation on an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: String,
}

/// One journal record.
///
/// Entries are immutable once built. `content` always holds the full text the
/// entry was built from; the title, tags and fields are views onto it and are
/// not removed from it.
///
/// `resolved_time` is never stored. It is always the parse of `timestamp`,
/// both for freshly built entries and for entries restored from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    title: String,
    content: String,
    timestamp: String,
    tags: Vec<String>,
    fields: Vec<Field>,
    #[serde(skip)]
    resolved_time: NaiveDateTime,
}

impl Entry {
    /// Rebuilds an entry read back from storage, recomputing its instant.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `timestamp` is not in canonical form.
    pub fn restore(
        title: String,
        content: String,
        timestamp: String,
        tags: Vec<String>,
        fields: Vec<Field>,
    ) -> Result<Self, chrono::ParseError> {
        let resolved_time = parse_timestamp(&timestamp)?;
        Ok(Entry {
            title,
            content,
            timestamp,
            tags,
            fields,
            resolved_time,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Canonical `YYYY-MM-DD, HH:MM` timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn resolved_time(&self) -> NaiveDateTime {
        self.resolved_time
    }

    /// Returns the entry with surrounding whitespace trimmed from every tag,
    /// dropping tags that end up empty.
    ///
    /// The builder keeps tags verbatim; this is the trim a caller applies when
    /// it wants tags that can be searched by their bare name.
    pub fn with_trimmed_tags(self) -> Self {
        let tags = self
            .tags
            .iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        Entry { tags, ..self }
    }
}

/// Builds an entry from the text left after the leading date tokens.
///
/// - The title runs up to and including the first `.`, `,`, `?` or `!`,
///   trimmed; without a delimiter it is the whole trimmed text.
/// - Every segment after a `+` is a tag, kept verbatim.
/// - Every word shaped `key=value` is a field.
/// - The content is `remainder`, untouched.
///
/// ```
/// use chrono::NaiveDate;
/// use daybook::journal_core::build_entry;
///
/// let instant = NaiveDate::from_ymd_opt(2023, 4, 15).unwrap().and_hms_opt(7, 30, 0).unwrap();
/// let entry = build_entry("Went running. Felt great! +health +morning", instant);
///
/// assert_eq!(entry.title(), "Went running.");
/// assert_eq!(entry.tags(), ["health ", "morning"]);
/// assert_eq!(entry.content(), "Went running. Felt great! +health +morning");
/// assert_eq!(entry.timestamp(), "2023-04-15, 07:30");
/// ```
pub fn build_entry(remainder: &str, instant: NaiveDateTime) -> Entry {
    // The timestamp only carries minutes
    let resolved_time = truncate_to_minute(instant);
    let timestamp = format_timestamp(resolved_time);

    Entry {
        title: extract_title(remainder),
        content: remainder.to_string(),
        timestamp,
        tags: extract_tags(remainder),
        fields: extract_fields(remainder),
        resolved_time,
    }
}

fn truncate_to_minute(instant: NaiveDateTime) -> NaiveDateTime {
    let below_minute =
        i64::from(instant.second()) * 1_000_000_000 + i64::from(instant.nanosecond());
    instant - Duration::nanoseconds(below_minute)
}

fn extract_title(text: &str) -> String {
    match text.find(TITLE_DELIMITERS) {
        Some(index) => text[..=index].trim().to_string(),
        None => text.trim().to_string(),
    }
}

fn extract_tags(text: &str) -> Vec<String> {
    text.split(TAG_MARKER).skip(1).map(str::to_string).collect()
}

fn extract_fields(text: &str) -> Vec<Field> {
    text.split_whitespace()
        .filter_map(|word| word.split_once(FIELD_SEPARATOR))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty() && !key.contains(TAG_MARKER))
        .map(|(key, value)| Field {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}
