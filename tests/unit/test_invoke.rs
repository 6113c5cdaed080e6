//! Unit tests for the dynamic invocation boundary

use katas::invoke::{invoke, invoke_by_name, json_type, Operation};
use serde_json::json;

#[test]
fn test_every_operation_by_name() {
    let cases = [
        ("strip", json!({"text": " a b ", "mode": "trim"}), json!("a b")),
        ("strip", json!({"text": " a b "}), json!("ab")),
        (
            "replace-tabs-newlines",
            json!({"text": "a\tb", "replacement": "-"}),
            json!("a-b"),
        ),
        ("replace-tabs-newlines", json!({"text": "a\nb"}), json!("a b")),
        (
            "remove-last-char",
            json!({"text": "aaaaaa", "needle": "a"}),
            json!("aaaaa"),
        ),
        (
            "remove-last",
            json!({"text": "hello world hello", "needle": "hello"}),
            json!("hello world "),
        ),
        ("pascal-case", json!({"text": ""}), json!("")),
        (
            "pascal-case-batch",
            json!({"items": ["user_name", "hello_world"]}),
            json!(["UserName", "HelloWorld"]),
        ),
        ("toggle-case", json!({"text": "aB1"}), json!("Ab1")),
        ("toggle-case-unicode", json!({"text": "ß"}), json!("SS")),
    ];
    for (name, args, expected) in cases {
        assert_eq!(invoke_by_name(name, &args).unwrap(), expected, "{}", name);
    }
}

#[test]
fn test_random_subset_defaults() {
    let value = invoke(Operation::RandomSubset, &json!({})).unwrap();
    let values: Vec<i64> = serde_json::from_value(value).unwrap();
    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|v| (2..=32).contains(v)));
}

#[test]
fn test_remove_last_char_rejects_multichar_needle() {
    let err = invoke(
        Operation::RemoveLastChar,
        &json!({"text": "hello", "needle": "ll"}),
    )
    .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_missing_argument_named_in_error() {
    let err = invoke(Operation::RemoveLast, &json!({"text": "hello"})).unwrap_err();
    assert!(err.to_string().contains("'needle'"));
}

#[test]
fn test_bad_mode_and_strategy() {
    assert!(invoke(Operation::Strip, &json!({"text": "x", "mode": "nope"}))
        .unwrap_err()
        .is_invalid_argument());
    assert!(invoke(Operation::RandomSubset, &json!({"strategy": "nope"}))
        .unwrap_err()
        .is_invalid_argument());
    assert!(invoke(Operation::Strip, &json!({"text": "x", "mode": 3}))
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_json_type_names() {
    assert_eq!(json_type(&json!(1.5)), "number");
    assert_eq!(json_type(&json!("s")), "text");
    assert_eq!(json_type(&json!(null)), "null");
}
