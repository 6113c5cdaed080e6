use regex::{Captures, Regex};
use std::sync::OnceLock;

static LETTER: OnceLock<Regex> = OnceLock::new();

fn letter_pattern() -> &'static Regex {
    LETTER.get_or_init(|| Regex::new(r"\p{L}").expect("invalid letter regex"))
}

/// Flip the case of ASCII letters; every other character passes through.
pub fn toggle_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Flip the case of every Unicode letter using full case mapping.
///
/// A letter that is its own uppercase form is lowercased, any other letter is
/// uppercased. Mappings may change length (`ß` becomes `SS`), so the result
/// is not guaranteed to round-trip outside ASCII.
pub fn toggle_case_unicode(text: &str) -> String {
    letter_pattern()
        .replace_all(text, |caps: &Captures| {
            let letter = &caps[0];
            let upper = letter.to_uppercase();
            if upper == letter {
                letter.to_lowercase()
            } else {
                upper
            }
        })
        .into_owned()
}
