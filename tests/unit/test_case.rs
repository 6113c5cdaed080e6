//! Unit tests for case transformations
//!
//! Tests cover:
//! - snake_case to PascalCase, single and batch
//! - ASCII and Unicode case toggling

use katas::case::{batch_to_pascal_case, capitalize, to_pascal_case, toggle_case, toggle_case_unicode};

// ============================================================================
// PascalCase Tests
// ============================================================================

mod pascal_tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(to_pascal_case("user_name"), "UserName");
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("multiple_under_scores"), "MultipleUnderScores");
    }

    #[test]
    fn test_digits_and_symbols_kept() {
        assert_eq!(to_pascal_case("v2_api_key"), "V2ApiKey");
        assert_eq!(to_pascal_case("x-ray_vision"), "X-rayVision");
    }

    #[test]
    fn test_capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_batch_empty() {
        let empty: Vec<&str> = Vec::new();
        assert!(batch_to_pascal_case(empty).is_empty());
    }
}

// ============================================================================
// Toggle Tests
// ============================================================================

mod toggle_tests {
    use super::*;

    #[test]
    fn test_example() {
        assert_eq!(toggle_case("Hello World!"), "hELLO wORLD!");
    }

    #[test]
    fn test_non_letters_pass_through() {
        let s = "123 !@# \t\n 456";
        assert_eq!(toggle_case(s), s);
        assert_eq!(toggle_case_unicode(s), s);
    }

    #[test]
    fn test_unicode_turkish_dotted_i() {
        // 'İ' lowercases to "i̇" (two code points)
        assert_eq!(toggle_case_unicode("İ"), "i\u{307}");
    }

    #[test]
    fn test_unicode_titlecase_letter_uppercases() {
        // U+01C5 is titlecase, not its own uppercase form
        assert_eq!(toggle_case_unicode("\u{01C5}"), "\u{01C4}");
    }
}
