//! Telemetry
//!
//! Structured logging for kata operations:
//! - Operation spans with timing and outcome
//! - Configurable log levels via RUST_LOG
//! - Control-character escaping so user text cannot forge log lines

use std::time::Instant;
use tracing::{error, info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Longest input excerpt written to a log line, in characters.
pub const MAX_LOGGED_CHARS: usize = 80;

/// Sanitize a string for safe log output by escaping control characters.
/// Prevents log injection where input embeds newlines to forge log entries.
pub fn sanitize_for_log(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            '\x1b' => out.push_str("\\e"),
            '\x00' => out.push_str("\\0"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            _ => out.push(c),
        }
    }
    out
}

/// Sanitized excerpt of user input, cut at [`MAX_LOGGED_CHARS`].
pub fn excerpt_for_log(s: &str) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(MAX_LOGGED_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", sanitize_for_log(&head))
    } else {
        sanitize_for_log(&head)
    }
}

/// Initialize global tracing subscriber with configurable output
/// By default, only enables tracing if RUST_LOG is explicitly set
pub fn init_tracing() {
    // Without RUST_LOG the CLI output stays clean
    if let Ok(filter) = std::env::var("RUST_LOG") {
        init_tracing_with_filter(&filter);
    }
}

/// Initialize tracing for `--verbose`
pub fn init_tracing_verbose() {
    init_tracing_with_filter("info")
}

/// Initialize with custom filter string
pub fn init_tracing_with_filter(filter: &str) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_level(true)
            .compact()
            .with_writer(std::io::stderr); // stdout carries results

        let filter_layer = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init();
    });
}

/// Run `f` inside a `kata.operation` span, recording duration and outcome.
pub fn track_operation<F, T, E>(operation: &str, f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    let start = Instant::now();
    let safe_name = sanitize_for_log(operation);
    let span = info_span!(
        "kata.operation",
        operation = safe_name.as_str(),
        duration_us = tracing::field::Empty,
        success = tracing::field::Empty,
        error = tracing::field::Empty,
    );
    let _enter = span.enter();

    let result = f();
    let duration = start.elapsed().as_micros() as u64;
    span.record("duration_us", duration);

    match &result {
        Ok(_) => {
            span.record("success", true);
            info!(duration_us = duration, "Operation completed");
        }
        Err(e) => {
            let safe_err = sanitize_for_log(&e.to_string());
            span.record("success", false);
            span.record("error", safe_err.as_str());
            error!(
                duration_us = duration,
                error = safe_err.as_str(),
                "Operation failed"
            );
        }
    }
    result
}

/// Initialize tracing for tests with a simple subscriber
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
