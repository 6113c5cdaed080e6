//! Katas - daily string and array exercises
//!
//! Five small, independent transformations, each with its canonical
//! algorithm and the alternatives worth comparing:
//!
//! - **Random subsets**: distinct integers from a closed range
//! - **Whitespace**: strip, trim, collapse or target tabs and newlines
//! - **Last occurrence**: drop the final match of a character or substring
//! - **PascalCase**: snake_case identifiers, singly or in batches
//! - **Case toggle**: ASCII or full Unicode
//!
//! # Quick Start
//!
//! ```
//! use katas::case::{to_pascal_case, toggle_case};
//! use katas::last_occurrence::remove_last_occurrence;
//!
//! assert_eq!(to_pascal_case("user_name"), "UserName");
//! assert_eq!(toggle_case("Hello World!"), "hELLO wORLD!");
//! assert_eq!(remove_last_occurrence("hello world", "l"), "hello word");
//! ```

// ─── Katas ─────────────────────────────────────────────────────────
pub mod case;
pub mod last_occurrence;
pub mod random_subset;
pub mod whitespace;

// ─── Boundaries ────────────────────────────────────────────────────
pub mod invoke;

// ─── Infrastructure ────────────────────────────────────────────────
pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod observability;
pub mod output;

pub use errors::{KataError, Result};
pub use random_subset::{Strategy, SubsetRequest};
pub use whitespace::{Position, StripMode};
