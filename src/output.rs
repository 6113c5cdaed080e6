//! Output Control Module
//!
//! Renders kata results and demo reports for the terminal:
//! - `text`: raw results, coloured ✓/✗ tables for the demo
//! - `json`: machine-readable output for scripting
//! - `quiet`: results only, no decorative chrome

use crate::demo::{DemoReport, DemoSection};
use colored::*;
use serde_json::Value;
use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};

/// Global quiet flag (set once at startup)
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Initialize output modes from CLI flags
pub(crate) fn init(quiet: bool, no_color: bool) {
    QUIET_MODE.store(quiet, Ordering::SeqCst);
    if no_color {
        colored::control::set_override(false);
    }
}

#[inline]
pub(crate) fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::SeqCst)
}

/// Render a single kata result.
///
/// Text results print bare so the output can be piped; arrays print one
/// JSON line.
pub fn render_value(value: &Value, format: OutputFormat) -> String {
    match (format, value) {
        (OutputFormat::Text, Value::String(s)) => s.clone(),
        (OutputFormat::Text, other) => other.to_string(),
        (OutputFormat::Json, other) => {
            serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())
        }
    }
}

pub fn print_value(value: &Value, format: OutputFormat) {
    println!("{}", render_value(value, format));
}

/// Quote text the way JSON does, making tabs and newlines visible.
fn quoted(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{:?}", s))
}

fn render_section(out: &mut String, section: &DemoSection, quiet: bool) {
    let method_width = section
        .rows
        .iter()
        .map(|r| r.method.chars().count())
        .chain(section.timings.iter().map(|t| t.method.chars().count()))
        .max()
        .unwrap_or(0);

    if !quiet {
        let _ = writeln!(out, "{}", "=".repeat(72).dimmed());
        let _ = writeln!(out, "{}", section.title.bold());
        let _ = writeln!(out, "{}", "=".repeat(72).dimmed());
    }

    let mut last_input: Option<&str> = None;
    for row in &section.rows {
        if !quiet && last_input != Some(row.input.as_str()) {
            let _ = writeln!(out, "\n{} {}", "input:".dimmed(), quoted(&row.input));
            if let Some(expected) = &row.expected {
                let _ = writeln!(out, "{} {}", "expected:".dimmed(), quoted(expected));
            }
            last_input = Some(row.input.as_str());
        }
        let mark = match row.passed {
            Some(true) => "✓".green(),
            Some(false) => "✗".red(),
            None => "·".dimmed(),
        };
        let _ = writeln!(
            out,
            "  {} {:<width$}  {}",
            mark,
            row.method,
            quoted(&row.output),
            width = method_width
        );
    }

    if !quiet && !section.timings.is_empty() {
        let _ = writeln!(out, "\n{}", "timings:".dimmed());
        for timing in &section.timings {
            let _ = writeln!(
                out,
                "  {:<width$}  {:>10.2} ms  ({} runs)",
                timing.method,
                timing.elapsed_ms,
                timing.iterations,
                width = method_width
            );
        }
    }
    let _ = writeln!(out);
}

/// Render a demo report as text.
pub fn render_demo_text(report: &DemoReport, quiet: bool) -> String {
    let mut out = String::new();
    for section in &report.sections {
        render_section(&mut out, section, quiet);
    }

    let failures = report.failures().count();
    let summary = format!(
        "{} checks, {} failed",
        report.checked_count(),
        failures
    );
    if failures == 0 {
        let _ = writeln!(out, "{} {}", "✓".green(), summary);
    } else {
        let _ = writeln!(out, "{} {}", "✗".red(), summary.red());
    }
    out
}

pub fn print_demo(report: &DemoReport, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", render_demo_text(report, is_quiet())),
        OutputFormat::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("{} failed to serialize demo report: {}", "✗".red(), e),
        },
    }
}
