//! Sanitize command: mask the input and write it to a file or stdout.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use is_terminal::IsTerminal;
use piimask_core::{RedactionEngine, RedactionReport};

use crate::commands::info_msg;
use crate::ui::diff_viewer;
use crate::ui::redaction_summary;

/// Options for [`run_sanitize`].
pub struct SanitizeOptions {
    pub input: String,
    pub diff: bool,
    pub output_path: Option<PathBuf>,
    pub no_redaction_summary: bool,
    pub quiet: bool,
}

/// Masks `opts.input` and hands the result to the configured sink.
///
/// With `--diff` and no output file the diff replaces the masked text on
/// stdout. With an output file the file gets the masked text and the diff is
/// printed to stderr.
pub fn run_sanitize(engine: &dyn RedactionEngine, opts: SanitizeOptions) -> Result<()> {
    info!("Starting sanitize operation.");

    let (sanitized_content, report) = engine.redact_with_report(&opts.input);

    debug!(
        "Content masked. Original length: {}, Masked length: {}",
        opts.input.len(),
        sanitized_content.len()
    );

    handle_primary_output(&opts, &sanitized_content)?;
    handle_redaction_summary(&report, &opts)?;

    info!("Sanitize operation completed.");
    Ok(())
}

fn handle_primary_output(opts: &SanitizeOptions, sanitized_content: &str) -> Result<()> {
    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Writing masked content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(sanitized_content.as_bytes())
            .with_context(|| format!("Failed to write output file: {}", path.display()))?;

        // The file only ever receives masked text; the diff goes to the terminal.
        if opts.diff {
            let stderr = io::stderr();
            let supports_color = stderr.is_terminal();
            diff_viewer::print_diff(&opts.input, sanitized_content, &mut stderr.lock(), supports_color)?;
        }
    } else {
        info!("Writing masked content to stdout.");
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        let supports_color = stdout.is_terminal();

        if opts.diff {
            diff_viewer::print_diff(&opts.input, sanitized_content, &mut writer, supports_color)?;
        } else {
            writer.write_all(sanitized_content.as_bytes()).context("Failed to write to stdout")?;
        }
        writer.flush().context("Failed to flush stdout")?;
    }
    Ok(())
}

fn handle_redaction_summary(report: &RedactionReport, opts: &SanitizeOptions) -> Result<()> {
    if !opts.no_redaction_summary && !opts.quiet {
        info!("Displaying redaction summary.");
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(report, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
