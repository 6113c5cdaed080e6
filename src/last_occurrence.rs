//! Removing the last occurrence of a character or substring
//!
//! `remove_last_occurrence` is the canonical right-to-left search.
//! `SearchStrategy` keeps the alternative searches around so the demo can
//! show they agree.

use crate::errors::{KataError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Remove the last occurrence of `needle` from `text` as one unit.
///
/// Returns `text` unchanged when `needle` is empty or absent.
pub fn remove_last_occurrence(text: &str, needle: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    match text.rfind(needle) {
        Some(index) => splice_out(text, index, needle.len()),
        None => text.to_string(),
    }
}

/// Remove the last occurrence of a single character.
///
/// `needle` must hold exactly one Unicode scalar value.
pub fn remove_last_char(text: &str, needle: &str) -> Result<String> {
    let c = single_char(needle)?;
    Ok(SearchStrategy::RightFind.apply(text, c))
}

/// Parse `needle` as exactly one character.
pub fn single_char(needle: &str) -> Result<char> {
    let mut chars = needle.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(KataError::invalid(
            "needle",
            format!(
                "expected exactly one character, got {}",
                needle.chars().count()
            ),
        )),
    }
}

/// Equivalent ways of locating the last occurrence of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// `str::rfind`
    #[default]
    RightFind,
    /// Walk `char_indices` backwards
    ReverseScan,
    /// Last match of the escaped needle
    RegexLastMatch,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::RightFind,
        SearchStrategy::ReverseScan,
        SearchStrategy::RegexLastMatch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::RightFind => "rfind",
            SearchStrategy::ReverseScan => "reverse scan",
            SearchStrategy::RegexLastMatch => "regex last match",
        }
    }

    /// Remove the last `needle` from `text` with this strategy.
    pub fn apply(&self, text: &str, needle: char) -> String {
        let found = match self {
            SearchStrategy::RightFind => text.rfind(needle),
            SearchStrategy::ReverseScan => text
                .char_indices()
                .rev()
                .find(|(_, c)| *c == needle)
                .map(|(i, _)| i),
            SearchStrategy::RegexLastMatch => last_regex_match(text, needle),
        };
        match found {
            Some(index) => splice_out(text, index, needle.len_utf8()),
            None => text.to_string(),
        }
    }
}

fn last_regex_match(text: &str, needle: char) -> Option<usize> {
    let pattern = regex::escape(needle.encode_utf8(&mut [0; 4]));
    // An escaped literal always compiles
    let re = Regex::new(&pattern).ok()?;
    re.find_iter(text).last().map(|m| m.start())
}

fn splice_out(text: &str, index: usize, len: usize) -> String {
    let mut out = String::with_capacity(text.len() - len);
    out.push_str(&text[..index]);
    out.push_str(&text[index + len..]);
    out
}
