//! Unit tests for whitespace stripping

use katas::whitespace::{collapse, remove_all, replace_tabs_and_newlines, strip};
use katas::{Position, StripMode};

const SAMPLE: &str = "  Hello   World  \n\t  JavaScript  ";

#[test]
fn test_helpers_match_modes() {
    assert_eq!(remove_all(SAMPLE), strip(SAMPLE, StripMode::All));
    assert_eq!(collapse(SAMPLE), strip(SAMPLE, StripMode::Collapse));
}

#[test]
fn test_only_whitespace_input() {
    let blank = " \t\n\r\u{2028} ";
    assert_eq!(strip(blank, StripMode::All), "");
    assert_eq!(strip(blank, StripMode::Trim), "");
    assert_eq!(strip(blank, StripMode::Collapse), "");
    assert_eq!(strip(blank, StripMode::SpacesOnly), "\t\n\r\u{2028}");
    assert_eq!(strip(blank, StripMode::TabsAndNewlines), " \u{2028} ");
    assert_eq!(strip(blank, StripMode::Positional(Position::Middle)), "");
}

#[test]
fn test_middle_leaves_later_runs() {
    assert_eq!(
        strip("one two\tthree", StripMode::Positional(Position::Middle)),
        "onetwo\tthree"
    );
}

#[test]
fn test_middle_crosses_newlines() {
    assert_eq!(
        strip("key:\n  value\nnext", StripMode::Positional(Position::Middle)),
        "key:value\nnext"
    );
}

#[test]
fn test_replacement_can_be_multichar() {
    assert_eq!(replace_tabs_and_newlines("a\nb\nc", "<br>"), "a<br>b<br>c");
}

#[test]
fn test_mode_serde_round_trip() {
    let json = serde_json::to_string(&StripMode::Positional(Position::End)).unwrap();
    assert_eq!(json, "\"end\"");
    let back: StripMode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, StripMode::Positional(Position::End));
    assert!(serde_json::from_str::<StripMode>("\"upside-down\"").is_err());
}
