//! Dynamic invocation
//!
//! Runs a kata by name with JSON arguments. This is the one boundary where a
//! caller can hand over a number where text is expected, so every argument is
//! type-checked here and mismatches become `KataError::InvalidArgument`.

use crate::case;
use crate::errors::{KataError, Result};
use crate::last_occurrence;
use crate::observability::telemetry::excerpt_for_log;
use crate::random_subset::{self, Strategy, SubsetRequest};
use crate::whitespace::{self, StripMode};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{Map, Value};
use tracing::debug;

/// Every operation reachable through [`invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    RandomSubset,
    Strip,
    ReplaceTabsNewlines,
    RemoveLastChar,
    RemoveLast,
    PascalCase,
    PascalCaseBatch,
    ToggleCase,
    ToggleCaseUnicode,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::RandomSubset,
        Operation::Strip,
        Operation::ReplaceTabsNewlines,
        Operation::RemoveLastChar,
        Operation::RemoveLast,
        Operation::PascalCase,
        Operation::PascalCaseBatch,
        Operation::ToggleCase,
        Operation::ToggleCaseUnicode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::RandomSubset => "random-subset",
            Operation::Strip => "strip",
            Operation::ReplaceTabsNewlines => "replace-tabs-newlines",
            Operation::RemoveLastChar => "remove-last-char",
            Operation::RemoveLast => "remove-last",
            Operation::PascalCase => "pascal-case",
            Operation::PascalCaseBatch => "pascal-case-batch",
            Operation::ToggleCase => "toggle-case",
            Operation::ToggleCaseUnicode => "toggle-case-unicode",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| KataError::UnknownOperation(s.to_string()))
    }
}

/// Run `operation` with the JSON object `args`.
pub fn invoke(operation: Operation, args: &Value) -> Result<Value> {
    let args = args.as_object().ok_or_else(|| {
        KataError::invalid(
            "args",
            format!("expected an object, got {}", json_type(args)),
        )
    })?;
    debug!(operation = operation.name(), "Invoking operation");

    let value = match operation {
        Operation::RandomSubset => {
            let defaults = SubsetRequest::default();
            let request = SubsetRequest::new(
                optional_u64(args, "length")?.map_or(Ok(defaults.length), |n| {
                    usize::try_from(n).map_err(|_| KataError::invalid("length", "out of range"))
                })?,
                optional_i64(args, "min")?.unwrap_or(defaults.min),
                optional_i64(args, "max")?.unwrap_or(defaults.max),
            );
            let strategy = match optional_str(args, "strategy")? {
                Some(name) => name.parse()?,
                None => Strategy::default(),
            };
            let values = match optional_u64(args, "seed")? {
                Some(seed) => random_subset::generate_with(
                    &mut StdRng::seed_from_u64(seed),
                    &request,
                    strategy,
                )?,
                None => random_subset::generate(&request, strategy)?,
            };
            Value::from(values)
        }
        Operation::Strip => {
            let text = require_str(args, "text")?;
            let mode = match optional_str(args, "mode")? {
                Some(name) => name.parse()?,
                None => StripMode::default(),
            };
            Value::from(whitespace::strip(text, mode))
        }
        Operation::ReplaceTabsNewlines => {
            let text = require_str(args, "text")?;
            let replacement = optional_str(args, "replacement")?.unwrap_or(" ");
            Value::from(whitespace::replace_tabs_and_newlines(text, replacement))
        }
        Operation::RemoveLastChar => {
            let text = require_str(args, "text")?;
            let needle = require_str(args, "needle")?;
            Value::from(last_occurrence::remove_last_char(text, needle)?)
        }
        Operation::RemoveLast => {
            let text = require_str(args, "text")?;
            let needle = require_str(args, "needle")?;
            Value::from(last_occurrence::remove_last_occurrence(text, needle))
        }
        Operation::PascalCase => Value::from(case::to_pascal_case(require_str(args, "text")?)),
        Operation::PascalCaseBatch => {
            let items = require_str_array(args, "items")?;
            Value::from(case::batch_to_pascal_case(items))
        }
        Operation::ToggleCase => Value::from(case::toggle_case(require_str(args, "text")?)),
        Operation::ToggleCaseUnicode => {
            Value::from(case::toggle_case_unicode(require_str(args, "text")?))
        }
    };

    if let Value::String(s) = &value {
        debug!(result = %excerpt_for_log(s), "Operation produced text");
    }
    Ok(value)
}

/// Convenience: parse the operation name, then [`invoke`].
pub fn invoke_by_name(name: &str, args: &Value) -> Result<Value> {
    invoke(name.parse()?, args)
}

/// JSON type name used in error messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn require_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    match args.get(name) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(KataError::invalid(
            name,
            format!("expected text, got {}", json_type(other)),
        )),
        None => Err(KataError::invalid(name, "missing required text argument")),
    }
}

fn optional_str<'a>(args: &'a Map<String, Value>, name: &str) -> Result<Option<&'a str>> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => require_str(args, name).map(Some),
    }
}

fn require_str_array<'a>(args: &'a Map<String, Value>, name: &str) -> Result<Vec<&'a str>> {
    let items = match args.get(name) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(KataError::invalid(
                name,
                format!("expected an array, got {}", json_type(other)),
            ))
        }
        None => return Err(KataError::invalid(name, "missing required array argument")),
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str().ok_or_else(|| {
                KataError::invalid(
                    format!("{}[{}]", name, i),
                    format!("expected text, got {}", json_type(item)),
                )
            })
        })
        .collect()
}

fn optional_i64(args: &Map<String, Value>, name: &str) -> Result<Option<i64>> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            KataError::invalid(
                name,
                format!("expected an integer, got {}", json_type(value)),
            )
        }),
    }
}

fn optional_u64(args: &Map<String, Value>, name: &str) -> Result<Option<u64>> {
    match args.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| {
            KataError::invalid(
                name,
                format!(
                    "expected a non-negative integer, got {}",
                    json_type(value)
                ),
            )
        }),
    }
}
