// File: piimask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot masking without building a pipeline by hand.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::catalog::standard_catalog;
use crate::config::CatalogConfig;
use crate::engine::RedactionEngine;
use crate::pipeline::Pipeline;

/// Masks `content` with the full standard catalog.
///
/// The only possible failure is compiling the catalog on first use.
pub fn redact_text(content: &str) -> Result<String> {
    let pipeline = Pipeline::standard().context("Failed to build the standard masking pipeline")?;
    Ok(pipeline.redact(content))
}

/// Masks `content` with the standard catalog restricted by `config`.
pub fn redact_text_with_config(config: &CatalogConfig, content: &str) -> Result<String> {
    let catalog = standard_catalog()
        .context("Failed to build the standard masking pipeline")?
        .select(config)
        .context("Invalid category selection")?;
    Ok(Pipeline::new(Arc::new(catalog)).redact(content))
}
