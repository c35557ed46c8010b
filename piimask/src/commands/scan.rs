//! Scan command: report what would be masked, without emitting the masked text.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::info;
use serde::Serialize;

use piimask_core::{RedactionEngine, RedactionSummaryItem};

use crate::commands::{info_msg, warn_msg};
use crate::ui::redaction_summary;

/// Options for [`run_scan`].
pub struct ScanOptions {
    pub input: String,
    pub fail_over_threshold: Option<usize>,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Machine-readable scan result.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub total_masked: usize,
    pub total_rejected: usize,
    pub categories: Vec<RedactionSummaryItem>,
}

/// Runs the pipeline over `opts.input` and reports per-category results.
///
/// Fails when `fail_over_threshold` is set and the number of masked values
/// exceeds it.
pub fn run_scan(engine: &dyn RedactionEngine, opts: ScanOptions) -> Result<ScanReport> {
    info!("Starting scan operation.");

    let (_, report) = engine.redact_with_report(&opts.input);
    let scan_report = ScanReport {
        total_masked: report.total_masked(),
        total_rejected: report.total_rejected(),
        categories: report.items.clone(),
    };

    if let Some(path) = &opts.json_file {
        let json = serde_json::to_string_pretty(&scan_report).context("Failed to serialize scan report")?;
        fs::write(path, json).with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
        if !opts.quiet {
            info_msg(format!("Scan report written to: {}", path.display()));
        }
    } else if opts.json_stdout {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        serde_json::to_writer_pretty(&mut writer, &scan_report).context("Failed to serialize scan report")?;
        writeln!(writer)?;
    } else if !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(&report, &mut io::stderr(), stderr_supports_color)?;
    }

    if let Some(threshold) = opts.fail_over_threshold {
        if scan_report.total_masked > threshold {
            if !opts.quiet {
                warn_msg(format!(
                    "Found {} sensitive value(s), exceeding the threshold of {}.",
                    scan_report.total_masked, threshold
                ));
            }
            bail!(
                "Sensitive data threshold exceeded: {} found, threshold {}",
                scan_report.total_masked,
                threshold
            );
        }
    }

    info!("Scan operation completed.");
    Ok(scan_report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use piimask_core::Pipeline;

    fn options(input: &str, threshold: Option<usize>) -> ScanOptions {
        ScanOptions {
            input: input.to_string(),
            fail_over_threshold: threshold,
            json_file: None,
            json_stdout: false,
            quiet: true,
        }
    }

    #[test]
    fn scan_counts_masked_values() -> Result<()> {
        let engine = Pipeline::standard()?;
        let report = run_scan(&engine, options("a@b.io and 12345678", None))?;
        assert_eq!(report.total_masked, 2);
        assert_eq!(report.total_rejected, 0);
        Ok(())
    }

    #[test]
    fn scan_fails_over_threshold() -> Result<()> {
        let engine = Pipeline::standard()?;
        assert!(run_scan(&engine, options("a@b.io and 12345678", Some(1))).is_err());
        assert!(run_scan(&engine, options("a@b.io and 12345678", Some(2))).is_ok());
        Ok(())
    }

    #[test]
    fn scan_writes_json_file() -> Result<()> {
        let engine = Pipeline::standard()?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.json");
        let mut opts = options("card 4532015112830367", None);
        opts.json_file = Some(path.clone());
        run_scan(&engine, opts)?;

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(json["total_masked"], 0);
        assert_eq!(json["total_rejected"], 1);
        assert_eq!(json["categories"][0]["category"], "payment_card");
        Ok(())
    }
}
