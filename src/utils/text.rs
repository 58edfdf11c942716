//! Text normalization helpers shared by cell rendering and matching

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any run of whitespace, including non-breaking spaces from `&nbsp;`
    static ref WHITESPACE_RUN: Regex = Regex::new(r"[\s\u{00A0}]+").unwrap();
}

/// Collapse every whitespace run to a single space and trim both ends
pub fn normalize_whitespace(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

/// Whether text renders as nothing visible
pub fn is_blank_text(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{00A0}')
}

/// Compare two strings, optionally ignoring case
pub fn text_equals(left: &str, right: &str, ignore_case: bool) -> bool {
    if ignore_case {
        left.to_lowercase() == right.to_lowercase()
    } else {
        left == right
    }
}

/// Prefix test, optionally ignoring case
pub fn text_starts_with(text: &str, prefix: &str, ignore_case: bool) -> bool {
    if ignore_case {
        text.to_lowercase().starts_with(&prefix.to_lowercase())
    } else {
        text.starts_with(prefix)
    }
}
