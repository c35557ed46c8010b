//! Configuration management for `piimask-core`.
//!
//! Detection patterns are compiled into the crate and cannot be changed. What
//! can be configured is *which* categories run. The configuration is a small
//! YAML document:
//!
//! ```yaml
//! enable: []            # empty means "all categories"
//! disable: [passport]   # always removed
//! ```
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::errors::PiiMaskError;

/// Selects the active categories of a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// If non-empty, only these categories run.
    pub enable: Vec<String>,
    /// These categories never run, even when listed in `enable`.
    pub disable: Vec<String>,
}

impl CatalogConfig {
    /// Loads a catalog configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading catalog configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(PiiMaskError::from)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!(
            "Loaded catalog configuration from {} ({} enabled, {} disabled).",
            path.display(),
            config.enable.len(),
            config.disable.len()
        );
        Ok(config)
    }

    /// Parses and validates a YAML configuration document.
    pub fn from_yaml_str(text: &str) -> Result<Self, PiiMaskError> {
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: CatalogConfig =
            serde_yml::from_str(text).map_err(|e| PiiMaskError::ConfigParse(e.to_string()))?;
        config.active_categories()?;
        Ok(config)
    }

    /// Applies command-line selections on top of this configuration.
    ///
    /// A non-empty `enable` list replaces the configured one; `disable`
    /// entries are added to the configured ones.
    pub fn with_overrides(mut self, enable: &[String], disable: &[String]) -> Self {
        if !enable.is_empty() {
            debug!("Overriding enabled categories with {:?}", enable);
            self.enable = enable.to_vec();
        }
        for name in disable {
            if !self.disable.contains(name) {
                self.disable.push(name.clone());
            }
        }
        self
    }

    /// Resolves the configured names into the set of active categories.
    ///
    /// Fails on the first unknown category name.
    pub fn active_categories(&self) -> Result<HashSet<Category>, PiiMaskError> {
        let enabled = parse_names(&self.enable)?;
        let disabled = parse_names(&self.disable)?;

        for category in enabled.intersection(&disabled) {
            warn!("Category '{}' is both enabled and disabled; it will not run.", category);
        }

        let mut active: HashSet<Category> = if enabled.is_empty() {
            Category::ALL.into_iter().collect()
        } else {
            enabled
        };
        active.retain(|category| !disabled.contains(category));
        Ok(active)
    }
}

fn parse_names(names: &[String]) -> Result<HashSet<Category>, PiiMaskError> {
    names.iter().map(|name| name.parse::<Category>()).collect()
}
