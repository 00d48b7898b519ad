//! Rendering of entries, tags and fields for the terminal.
//!
//! Provides consistent output across all commands:
//! - Human-readable colored output (default)
//! - Plain single-line output (--plaintext flag)
//! - JSON output (--json flag)
//!
//! Everything is rendered to a `String`; printing is left to the caller.

use crate::errors::AppResult;
use crate::journal_core::{Entry, Field};
use crossterm::style::Stylize;
use std::collections::BTreeMap;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Labelled, colored output (default)
    #[default]
    Human,
    /// One line per entry
    Plain,
    /// Pretty-printed JSON in the storage schema
    Json,
}

impl RenderMode {
    /// Create mode from CLI flags
    pub fn from_flags(plaintext: bool, json: bool) -> Self {
        if json {
            RenderMode::Json
        } else if plaintext {
            RenderMode::Plain
        } else {
            RenderMode::Human
        }
    }
}

/// Renders a list of entries in the given mode.
///
/// # Errors
///
/// Returns `AppError::Serialization` if JSON encoding fails.
pub fn render_entries(entries: &[&Entry], mode: RenderMode) -> AppResult<String> {
    match mode {
        RenderMode::Json => {
            let mut json = serde_json::to_string_pretty(entries)?;
            json.push('\n');
            Ok(json)
        }
        RenderMode::Plain => Ok(entries
            .iter()
            .map(|entry| plain_line(entry) + "\n")
            .collect()),
        RenderMode::Human => {
            if entries.is_empty() {
                return Ok("No entries found.\n".to_string());
            }
            let mut out = String::new();
            for entry in entries {
                out.push_str(&human_block(entry));
            }
            Ok(out)
        }
    }
}

/// Renders tag usage counts, one `tag count` pair per line.
pub fn render_tag_counts(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(tag, count)| format!("{} {}\n", tag.as_str().magenta(), count))
        .collect()
}

/// Renders fields, one `key value` pair per line.
pub fn render_fields(fields: &[&Field]) -> String {
    fields
        .iter()
        .map(|field| format!("{} {}\n", field.key.as_str().magenta(), field.value))
        .collect()
}

fn plain_line(entry: &Entry) -> String {
    let mut parts = vec![format!("[{}]", entry.timestamp()), entry.title().to_string()];
    parts.push(entry.content().to_string());
    if !entry.tags().is_empty() {
        parts.push(format_tags(entry));
    }
    parts.extend(
        entry
            .fields()
            .iter()
            .map(|field| format!("{}={}", field.key, field.value)),
    );
    parts.join(" ")
}

fn human_block(entry: &Entry) -> String {
    let tags = if entry.tags().is_empty() {
        String::new()
    } else {
        format_tags(entry)
    };
    let fields: Vec<String> = entry
        .fields()
        .iter()
        .map(|field| format!("{}={}", field.key, field.value))
        .collect();
    format!(
        "\n{}{}\n{}{}\n{}{}\n{}{}\n{}{}\n",
        "Date: ".blue(),
        entry.timestamp(),
        "Title: ".green(),
        entry.title(),
        "Content: ".green(),
        entry.content(),
        "Tags: ".magenta(),
        tags,
        "Fields: ".green(),
        fields.join(" ")
    )
}

fn format_tags(entry: &Entry) -> String {
    let tags: Vec<&str> = entry.tags().iter().map(|tag| tag.trim()).collect();
    format!("+{}", tags.join(" +"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal_core::build_entry;
    use chrono::NaiveDate;

    fn entry() -> Entry {
        let instant = NaiveDate::from_ymd_opt(2023, 4, 15)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();
        build_entry("Went running. Felt great! km=5 +health +morning", instant)
    }

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(RenderMode::from_flags(false, false), RenderMode::Human);
        assert_eq!(RenderMode::from_flags(true, false), RenderMode::Plain);
        assert_eq!(RenderMode::from_flags(false, true), RenderMode::Json);
        assert_eq!(RenderMode::from_flags(true, true), RenderMode::Json);
    }

    #[test]
    fn test_plain_rendering() {
        let entry = entry();
        let out = render_entries(&[&entry], RenderMode::Plain).unwrap();
        assert_eq!(
            out,
            "[2023-04-15, 07:30] Went running. Went running. Felt great! km=5 +health +morning +health +morning km=5\n"
        );
    }

    #[test]
    fn test_json_rendering_matches_storage_schema() {
        let entry = entry();
        let out = render_entries(&[&entry], RenderMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["title"], "Went running.");
        assert_eq!(value[0]["timestamp"], "2023-04-15, 07:30");
        assert_eq!(value[0]["tags"][0], "health ");
        assert_eq!(value[0]["fields"][0]["value"], "5");
    }

    #[test]
    fn test_human_rendering_has_labels() {
        let entry = entry();
        let out = render_entries(&[&entry], RenderMode::Human).unwrap();
        for label in ["Date: ", "Title: ", "Content: ", "Tags: ", "Fields: "] {
            assert!(out.contains(label), "missing {}", label);
        }
        assert!(out.contains("2023-04-15, 07:30"));
        assert!(out.contains("+health +morning"));
    }

    #[test]
    fn test_human_block_line_layout() {
        let entry = entry();
        let out = render_entries(&[&entry, &entry], RenderMode::Human).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(out.ends_with('\n'));

        let labels = ["Date: ", "Title: ", "Content: ", "Tags: ", "Fields: "];
        for block in lines.chunks(6) {
            assert_eq!(block[0], "");
            for (line, label) in block[1..].iter().zip(labels) {
                assert!(line.contains(label), "{:?} lacks {}", line, label);
            }
            assert!(block[5].ends_with("km=5"));
        }
    }

    #[test]
    fn test_empty_rendering() {
        assert_eq!(render_entries(&[], RenderMode::Plain).unwrap(), "");
        assert_eq!(render_entries(&[], RenderMode::Json).unwrap().trim(), "[]");
        assert!(render_entries(&[], RenderMode::Human)
            .unwrap()
            .contains("No entries found"));
    }

    #[test]
    fn test_render_tag_counts_and_fields() {
        let mut counts = BTreeMap::new();
        counts.insert("health".to_string(), 2);
        counts.insert("books".to_string(), 1);
        let out = render_tag_counts(&counts);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("books") && lines[0].ends_with(" 1"));
        assert!(lines[1].contains("health") && lines[1].ends_with(" 2"));
        assert!(out.ends_with('\n'));

        let field = Field {
            key: "mood".to_string(),
            value: "calm".to_string(),
        };
        let out = render_fields(&[&field]);
        assert!(out.contains("mood"));
        assert!(out.trim_end().ends_with("calm"));
    }
}
