//! Unit tests for the config module
//!
//! Tests cover:
//! - Config defaults
//! - Loading from explicit files
//! - Validation errors

use katas::config::Config;
use katas::errors::{get_exit_code, EXIT_CONFIG_ERROR};
use katas::{Strategy, StripMode};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_explicit_file() {
    let file = write_config(
        r#"
        [random]
        length = 3
        min = -1
        max = 1
        strategy = "rejection"

        [whitespace]
        mode = "collapse"
        replacement = "_"

        [demo]
        timing_iterations = 5
        "#,
    );
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.random.length, 3);
    assert_eq!(config.random.min, -1);
    assert_eq!(config.random.strategy, Strategy::Rejection);
    assert_eq!(config.whitespace.mode, StripMode::Collapse);
    assert_eq!(config.whitespace.replacement, "_");
    assert_eq!(config.demo.timing_iterations, 5);
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.random, Config::default().random);
}

#[test]
fn test_invalid_range_maps_to_config_exit_code() {
    let file = write_config("[random]\nlength = 10\nmin = 1\nmax = 3\n");
    let err = Config::load(file.path().to_str()).unwrap_err();
    assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn test_malformed_toml_maps_to_config_exit_code() {
    let file = write_config("[random\nlength = ");
    let err = Config::load(file.path().to_str()).unwrap_err();
    assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn test_pool_removal_range_limit_is_a_config_error() {
    let file = write_config("[random]\nmax = 1000000000\n");
    let err = Config::load(file.path().to_str()).unwrap_err();
    assert_eq!(get_exit_code(&err), EXIT_CONFIG_ERROR);
    assert!(format!("{:#}", err).contains("too large"));
}

#[test]
fn test_wide_range_is_fine_for_rejection() {
    let file = write_config("[random]\nmax = 1000000000\nstrategy = \"rejection-with-set\"\n");
    let config = Config::load(file.path().to_str()).unwrap();
    assert_eq!(config.random.max, 1_000_000_000);
}
