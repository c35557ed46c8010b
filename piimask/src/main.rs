// piimask/src/main.rs
//! piimask entry point.
//!
//! Parses arguments, sets up logging, builds the masking pipeline and
//! dispatches to the selected command.

use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use piimask::cli::{Cli, Commands};
use piimask::commands::input::read_input;
use piimask::commands::sanitize::{run_sanitize, SanitizeOptions};
use piimask::commands::scan::{run_scan, ScanOptions};
use piimask::commands::{build_engine, error_msg};
use piimask::logger;

fn main() {
    if let Err(e) = run() {
        error_msg(format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // A missing .env file is not an error.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }
    info!("piimask started. Version: {}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Commands::Sanitize(cmd) => {
            let engine = build_engine(&cmd.selection)?;
            let input = read_input(&cmd.input)?;
            run_sanitize(
                &engine,
                SanitizeOptions {
                    input,
                    diff: cmd.diff,
                    output_path: cmd.output,
                    no_redaction_summary: cmd.no_summary,
                    quiet: args.quiet,
                },
            )
        }
        Commands::Scan(cmd) => {
            let engine = build_engine(&cmd.selection)?;
            let input = read_input(&cmd.input)?;
            run_scan(
                &engine,
                ScanOptions {
                    input,
                    fail_over_threshold: cmd.fail_over_threshold,
                    json_file: cmd.json_file,
                    json_stdout: cmd.json_stdout,
                    quiet: args.quiet,
                },
            )
            .map(|_| ())
        }
    }
}
