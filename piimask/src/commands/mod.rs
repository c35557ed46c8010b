//! Command implementations and the shared engine setup.

pub mod input;
pub mod sanitize;
pub mod scan;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;

use piimask_core::{standard_catalog, CatalogConfig, Pipeline};

use crate::cli::SelectionArgs;
use crate::ui::output_format;

/// Builds the masking pipeline from the config file and `--enable`/`--disable` flags.
pub fn build_engine(selection: &SelectionArgs) -> Result<Pipeline> {
    let config = match &selection.config {
        Some(path) => CatalogConfig::load_from_file(path)?,
        None => CatalogConfig::default(),
    };
    let config = config.with_overrides(&selection.enable, &selection.disable);
    debug!("Effective category selection: {:?}", config);

    let catalog = standard_catalog()
        .context("Failed to compile the category catalog")?
        .select(&config)
        .context("Invalid category selection")?;
    debug!("Active categories: {:?}", catalog.categories());
    Ok(Pipeline::new(Arc::new(catalog)))
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}
