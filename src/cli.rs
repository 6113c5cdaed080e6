//! Command-line front end
//!
//! Every kata subcommand is translated into JSON arguments and run through
//! [`crate::invoke`], so the CLI and `katas call` share one validation path.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::Config;
use crate::demo::{self, DemoTopic};
use crate::errors::KataError;
use crate::invoke::{self, Operation};
use crate::observability::telemetry::{
    excerpt_for_log, init_tracing, init_tracing_verbose, track_operation,
};
use crate::output::{self, OutputFormat};
use crate::random_subset::Strategy;
use crate::whitespace::StripMode;

#[derive(Parser)]
#[command(name = "katas")]
#[command(about = "Daily string and array katas, with every variant side by side")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Quiet mode (results only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (log each operation to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    output_format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw distinct random integers from a closed range
    #[command(alias = "r")]
    Random {
        /// How many values (defaults to [random].length)
        #[arg(short = 'n', long)]
        length: Option<usize>,

        /// Smallest allowed value
        #[arg(long, allow_negative_numbers = true)]
        min: Option<i64>,

        /// Largest allowed value
        #[arg(long, allow_negative_numbers = true)]
        max: Option<i64>,

        /// Sampling strategy
        #[arg(short, long, value_enum)]
        strategy: Option<Strategy>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Remove or normalise whitespace
    Strip {
        /// Input text ("-" reads stdin)
        text: String,

        /// all, spaces-only, trim, collapse, start, end, middle,
        /// tabs-and-newlines, compress-control
        #[arg(short, long)]
        mode: Option<StripMode>,
    },

    /// Replace tabs, newlines and carriage returns
    ReplaceControl {
        /// Input text ("-" reads stdin)
        text: String,

        /// Replacement for each control character
        #[arg(long = "with", value_name = "STR")]
        replacement: Option<String>,
    },

    /// Remove the last occurrence of a character or substring
    RemoveLast {
        /// Input text ("-" reads stdin)
        text: String,

        /// What to remove
        needle: String,

        /// Require NEEDLE to be exactly one character
        #[arg(long)]
        single_char: bool,
    },

    /// Convert snake_case identifiers to PascalCase
    #[command(alias = "p")]
    Pascal {
        /// One or more identifiers
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Flip the case of every letter
    #[command(alias = "t")]
    Toggle {
        /// Input text ("-" reads stdin)
        text: String,

        /// Flip all Unicode letters, not just ASCII
        #[arg(long)]
        unicode: bool,
    },

    /// Run an operation by name with JSON arguments
    Call {
        /// Operation name, e.g. toggle-case
        operation: String,

        /// Arguments as a JSON object ("-" reads stdin)
        #[arg(default_value = "{}")]
        args: String,
    },

    /// Compare every variant on the sample inputs, with timings
    #[command(alias = "d")]
    Demo {
        #[arg(value_enum, default_value = "all")]
        topic: DemoTopic,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

pub fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    if cli.verbose {
        init_tracing_verbose();
    }
    output::init(
        cli.quiet,
        cli.no_color || std::env::var("NO_COLOR").is_ok(),
    );

    let config = Config::load(cli.config.as_deref())?;
    let format = cli.output_format;

    match cli.command {
        Commands::Random {
            length,
            min,
            max,
            strategy,
            seed,
        } => {
            let args = json!({
                "length": length.unwrap_or(config.random.length),
                "min": min.unwrap_or(config.random.min),
                "max": max.unwrap_or(config.random.max),
                "strategy": strategy.unwrap_or(config.random.strategy).name(),
                "seed": seed,
            });
            run_operation(Operation::RandomSubset, &args, format)
        }
        Commands::Strip { text, mode } => {
            let mode = mode.unwrap_or(config.whitespace.mode);
            let args = json!({ "text": read_text(text)?, "mode": mode.name() });
            run_operation(Operation::Strip, &args, format)
        }
        Commands::ReplaceControl { text, replacement } => {
            let args = json!({
                "text": read_text(text)?,
                "replacement": replacement.unwrap_or_else(|| config.whitespace.replacement.clone()),
            });
            run_operation(Operation::ReplaceTabsNewlines, &args, format)
        }
        Commands::RemoveLast {
            text,
            needle,
            single_char,
        } => {
            let op = if single_char {
                Operation::RemoveLastChar
            } else {
                Operation::RemoveLast
            };
            let args = json!({ "text": read_text(text)?, "needle": needle });
            run_operation(op, &args, format)
        }
        Commands::Pascal { words } => {
            if words.len() == 1 {
                run_operation(Operation::PascalCase, &json!({ "text": words[0] }), format)
            } else {
                run_operation(Operation::PascalCaseBatch, &json!({ "items": words }), format)
            }
        }
        Commands::Toggle { text, unicode } => {
            let op = if unicode {
                Operation::ToggleCaseUnicode
            } else {
                Operation::ToggleCase
            };
            run_operation(op, &json!({ "text": read_text(text)? }), format)
        }
        Commands::Call { operation, args } => {
            let op: Operation = operation.parse()?;
            let raw = read_text(args)?;
            let args: Value = serde_json::from_str(&raw).map_err(|e| {
                KataError::invalid("args", format!("not valid JSON: {}", e))
            })?;
            run_operation(op, &args, format)
        }
        Commands::Demo { topic } => {
            let report = demo::run_demo(topic, &config).context("Demo failed to run")?;
            output::print_demo(&report, format);
            let failures = report.failures().count();
            if failures > 0 {
                bail!("{} demo checks failed", failures);
            }
            Ok(())
        }
        Commands::ShowConfig => {
            let text = toml::to_string_pretty(&config).context("Failed to render config")?;
            print!("{}", text);
            Ok(())
        }
    }
}

fn run_operation(op: Operation, args: &Value, format: OutputFormat) -> Result<()> {
    let value = track_operation(op.name(), || invoke::invoke(op, args))?;
    output::print_value(&value, format);
    Ok(())
}

/// `-` means read all of stdin; anything else is the text itself.
fn read_text(arg: String) -> Result<String> {
    if arg != "-" {
        return Ok(arg);
    }
    use std::io::Read;
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    debug!(input = %excerpt_for_log(&buffer), "Read input from stdin");
    Ok(buffer)
}
