// piimask/src/logger.rs
//! Logging setup for the piimask binary.
//!
//! `RUST_LOG` is honoured. An explicit level (from `--debug` or `--quiet`)
//! overrides it for the piimask crates only.

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialises `env_logger`. Safe to call more than once; later calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    if let Some(level) = level {
        builder.filter_module("piimask", level);
        builder.filter_module("piimask_core", level);
    }

    let _ = builder.try_init();
}
