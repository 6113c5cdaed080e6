//! Whitespace and control-character stripping
//!
//! "Whitespace" means the Unicode `White_Space` property throughout, the same
//! class `char::is_whitespace` and `str::trim` use. Only `SpacesOnly` narrows
//! it to U+0020, and the tab/newline modes touch `\t`, `\n` and `\r` only.

use crate::errors::{KataError, Result};
use serde::{Deserialize, Serialize};

/// Where `StripMode::Positional` removes whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Start,
    End,
    Middle,
    All,
}

impl Position {
    fn name(&self) -> &'static str {
        match self {
            Position::Start => "start",
            Position::End => "end",
            Position::Middle => "middle",
            Position::All => "all",
        }
    }
}

/// What [`strip`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StripMode {
    /// Every whitespace character
    #[default]
    All,
    /// Only the ASCII space
    SpacesOnly,
    /// Leading and trailing runs
    Trim,
    /// Each run becomes one space, ends trimmed
    Collapse,
    /// Whitespace at one position only
    Positional(Position),
    /// Tabs, newlines and carriage returns; spaces survive
    TabsAndNewlines,
    /// Tabs and newlines become spaces, then collapse
    CompressControl,
}

impl StripMode {
    /// Every distinct mode, in the order the demo reports them.
    pub const ALL: [StripMode; 9] = [
        StripMode::All,
        StripMode::SpacesOnly,
        StripMode::Trim,
        StripMode::Collapse,
        StripMode::Positional(Position::Start),
        StripMode::Positional(Position::End),
        StripMode::Positional(Position::Middle),
        StripMode::TabsAndNewlines,
        StripMode::CompressControl,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StripMode::All => "all",
            StripMode::SpacesOnly => "spaces-only",
            StripMode::Trim => "trim",
            StripMode::Collapse => "collapse",
            StripMode::Positional(Position::All) => "positional:all",
            StripMode::Positional(position) => position.name(),
            StripMode::TabsAndNewlines => "tabs-and-newlines",
            StripMode::CompressControl => "compress-control",
        }
    }
}

impl std::fmt::Display for StripMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StripMode {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        let mode = match s.trim().to_ascii_lowercase().as_str() {
            "all" => StripMode::All,
            "spaces-only" | "spaces" => StripMode::SpacesOnly,
            "trim" => StripMode::Trim,
            "collapse" => StripMode::Collapse,
            "start" | "positional:start" => StripMode::Positional(Position::Start),
            "end" | "positional:end" => StripMode::Positional(Position::End),
            "middle" | "positional:middle" => StripMode::Positional(Position::Middle),
            "positional:all" => StripMode::Positional(Position::All),
            "tabs-and-newlines" => StripMode::TabsAndNewlines,
            "compress-control" => StripMode::CompressControl,
            other => {
                return Err(KataError::invalid(
                    "mode",
                    format!("unknown strip mode '{}'", other),
                ))
            }
        };
        Ok(mode)
    }
}

impl TryFrom<String> for StripMode {
    type Error = KataError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<StripMode> for String {
    fn from(mode: StripMode) -> Self {
        mode.name().to_string()
    }
}

/// Apply `mode` to `text`.
pub fn strip(text: &str, mode: StripMode) -> String {
    match mode {
        StripMode::All | StripMode::Positional(Position::All) => remove_all(text),
        StripMode::SpacesOnly => text.replace(' ', ""),
        StripMode::Trim => text.trim().to_string(),
        StripMode::Collapse => collapse(text),
        StripMode::Positional(Position::Start) => text.trim_start().to_string(),
        StripMode::Positional(Position::End) => text.trim_end().to_string(),
        StripMode::Positional(Position::Middle) => remove_first_inner_run(text),
        StripMode::TabsAndNewlines => text.chars().filter(|c| !is_control_break(*c)).collect(),
        StripMode::CompressControl => collapse(&replace_tabs_and_newlines(text, " ")),
    }
}

/// Remove every whitespace character.
pub fn remove_all(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace every whitespace run with a single space and trim both ends.
pub fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Substitute each tab, newline and carriage return with `replacement`.
pub fn replace_tabs_and_newlines(text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_control_break(c) {
            out.push_str(replacement);
        } else {
            out.push(c);
        }
    }
    out
}

fn is_control_break(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

// Drops the first whitespace run after the leading non-whitespace prefix.
fn remove_first_inner_run(text: &str) -> String {
    let Some(run_start) = text.find(char::is_whitespace) else {
        return text.to_string();
    };
    let rest = &text[run_start..];
    let run_len = rest
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(rest.len());

    let mut out = String::with_capacity(text.len() - run_len);
    out.push_str(&text[..run_start]);
    out.push_str(&rest[run_len..]);
    out
}
