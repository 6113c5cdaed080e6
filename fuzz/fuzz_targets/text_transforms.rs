#![no_main]

use katas::case::{to_pascal_case, toggle_case, toggle_case_unicode};
use katas::last_occurrence::{remove_last_occurrence, SearchStrategy};
use katas::whitespace::{replace_tabs_and_newlines, strip};
use katas::StripMode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for mode in StripMode::ALL {
        let _ = strip(text, mode);
    }
    let _ = replace_tabs_and_newlines(text, "_");

    if let Some(last) = text.chars().last() {
        let expected = SearchStrategy::RightFind.apply(text, last);
        for strategy in SearchStrategy::ALL {
            assert_eq!(strategy.apply(text, last), expected);
        }
        if let Some(prefix) = text.get(..text.len() / 2) {
            let _ = remove_last_occurrence(text, prefix);
        }
    }

    let _ = to_pascal_case(text);
    assert_eq!(toggle_case(&toggle_case(text)), text);
    let _ = toggle_case_unicode(text);
});
