//! The in-memory journal: an ordered collection of entries for one invocation.

use crate::journal_core::entry::{Entry, Field};
use crate::journal_core::query::{filter_entries, Query};
use std::collections::BTreeMap;

/// All entries of a journal in creation order.
///
/// Creation order is not chronological order: backdated entries are appended
/// at the end like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Journal { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn query(&self, query: &Query) -> Vec<&Entry> {
        filter_entries(&self.entries, query)
    }

    /// Deletes every entry matching `query` and returns how many were removed.
    pub fn remove(&mut self, query: &Query) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !query.matches(entry));
        before - self.entries.len()
    }

    /// Deletes every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    /// Number of entries carrying each tag.
    ///
    /// Tags are compared after trimming, empty tags are skipped, and an entry
    /// repeating a tag counts once.
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            let mut seen: Vec<&str> = Vec::new();
            for tag in entry.tags().iter().map(|tag| tag.trim()) {
                if tag.is_empty() || seen.contains(&tag) {
                    continue;
                }
                seen.push(tag);
                *counts.entry(tag.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Every field of every entry, in journal order.
    pub fn fields(&self) -> Vec<&Field> {
        self.entries.iter().flat_map(|entry| entry.fields()).collect()
    }
}
