//! Error path and edge case tests
//!
//! Every validation failure must surface as `InvalidArgument` (or
//! `UnknownOperation` at the dynamic boundary), never as a panic.

use katas::errors::{get_exit_code, KataError, EXIT_INVALID_ARGUMENT};
use katas::invoke::{invoke, Operation};
use katas::last_occurrence::remove_last_char;
use katas::random_subset::{generate, Strategy, SubsetRequest};
use serde_json::json;

#[test]
fn test_non_text_arguments_everywhere() {
    let non_text = [json!(1), json!(false), json!([]), json!({}), json!(null)];
    for op in Operation::ALL {
        if matches!(op, Operation::RandomSubset | Operation::PascalCaseBatch) {
            continue;
        }
        for bad in &non_text {
            let result = invoke(op, &json!({"text": bad, "needle": "x"}));
            let err = result.expect_err("non-text must be rejected");
            assert!(err.is_invalid_argument(), "{} gave {}", op, err);
        }
    }
}

#[test]
fn test_non_sequence_batch() {
    for bad in [json!("a_b"), json!(1), json!({"a": "b"})] {
        let err = invoke(Operation::PascalCaseBatch, &json!({ "items": bad })).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn test_impossible_subset_is_error_not_hang() {
    for strategy in Strategy::ALL {
        let err = generate(&SubsetRequest::new(4, 1, 3), strategy).unwrap_err();
        assert!(matches!(err, KataError::InvalidArgument { .. }));
    }
}

#[test]
fn test_invalid_argument_exit_code() {
    let err: anyhow::Error = remove_last_char("abc", "").unwrap_err().into();
    assert_eq!(get_exit_code(&err), EXIT_INVALID_ARGUMENT);
}
