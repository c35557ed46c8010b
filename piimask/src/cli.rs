//! This file defines the command-line interface (CLI) for the piimask application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "piimask",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mask personal data in text",
    long_about = "piimask finds email addresses, phone numbers, payment card numbers, passport numbers, national identifiers and bank account numbers in text and partially masks them with '*', leaving the rest of the text untouched.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the piimask crates)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `piimask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks sensitive data in a file, stdin, or labeled fields.
    #[command(about = "Masks sensitive data in a file, stdin, or labeled fields.")]
    Sanitize(SanitizeCommand),

    /// Reports what would be masked without printing the masked text.
    #[command(about = "Reports what would be masked without printing the masked text.")]
    Scan(ScanCommand),
}

/// Where the text to process comes from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Path to an input file (reads from stdin if neither this nor --field is given).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Labeled values, combined into "Label: value" lines.
    #[arg(
        long = "field",
        short = 'f',
        value_name = "LABEL=VALUE",
        value_parser = parse_field,
        conflicts_with = "input_file",
        help = "Add a labeled value (e.g. --field \"Email=jane@example.org\"). Repeatable."
    )]
    pub fields: Vec<(String, String)>,
}

/// Which categories run.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Path to a YAML file selecting categories.
    #[arg(long = "config", value_name = "FILE", env = "PIIMASK_CONFIG", help = "Path to a YAML category selection file.")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these categories (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable only these categories (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these categories (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these categories (comma-separated).")]
    pub disable: Vec<String>,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Write masked output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the redaction summary.
    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Exit with a non-zero code if the number of masked values exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of masked values exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export scan summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan summary to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print scan summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the scan summary to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Parses a `LABEL=VALUE` pair. Only the first `=` separates label from value.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (label, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LABEL=VALUE, got '{}'", raw))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(format!("field label is empty in '{}'", raw));
    }
    Ok((label.to_string(), value.to_string()))
}
