// piimask/src/commands/input.rs
//! Text sources: a file, stdin, or labeled field values.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use log::info;

use crate::cli::InputArgs;

/// Reads the whole input as one string.
///
/// Labeled fields take precedence over stdin; a file and fields cannot be
/// combined (enforced by clap).
pub fn read_input(args: &InputArgs) -> Result<String> {
    if !args.fields.is_empty() {
        info!("Composing input from {} labeled field(s).", args.fields.len());
        return Ok(compose_labeled_fields(&args.fields));
    }

    match &args.input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Joins labeled values as `"Label: value\n"` lines, trimming each value.
pub fn compose_labeled_fields(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(label, value)| format!("{}: {}\n", label, value.trim()))
        .collect()
}
