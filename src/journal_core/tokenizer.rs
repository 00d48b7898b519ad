//! Whitespace normalization and leading-token splitting for free-text entries.

/// Collapses every run of two or more spaces into a single space.
///
/// Only the space character is touched; tabs and newlines are preserved so that
/// multi-line content survives. The function is idempotent.
///
/// ```
/// use daybook::journal_core::normalize;
///
/// assert_eq!(normalize("today    went   out"), "today went out");
/// assert_eq!(normalize(&normalize("a     b")), normalize("a     b"));
/// ```
pub fn normalize(raw: &str) -> String {
    let mut text = raw.to_string();
    while text.contains("  ") {
        text = text.replace("  ", " ");
    }
    text
}

/// Splits normalized text into space-separated tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').collect()
}

/// Rejoins the tokens left over once the resolver consumed `consumed` leading tokens.
pub fn remainder(tokens: &[&str], consumed: usize) -> String {
    tokens.get(consumed..).unwrap_or_default().join(" ")
}
