// piimask-core/src/lib.rs
//! # piimask Core Library
//!
//! `piimask-core` detects personal data in free-form text and masks it in
//! place, revealing only a small tail of each value. It has no I/O of its own:
//! callers hand it a string and get a string back.
//!
//! ## Modules
//!
//! * `catalog`: The fixed, ordered list of category rules and their patterns.
//! * `validators`: Extra validity checks on raw matches (Luhn for payment cards).
//! * `masking`: Per-category masking strategies.
//! * `pipeline`: Applies the catalog pass by pass.
//! * `engine`: The `RedactionEngine` trait front ends depend on.
//! * `config`: YAML selection of active categories.
//! * `redaction_match`: Match records, segments, reports and PII-safe logging.
//! * `headless`: One-shot helpers.
//! * `errors`: The crate's error type.
//!
//! ## Categories
//!
//! Applied in this order, each on the output of the previous one:
//!
//! | # | category       | shape                                          | mask                     |
//! |---|----------------|------------------------------------------------|--------------------------|
//! | 1 | `phone`        | 10 digits, optional country code + separator   | first 5 digits hidden    |
//! | 2 | `email`        | `local@domain.tld`                             | local part hidden        |
//! | 3 | `payment_card` | 13-19 digits, spaces/hyphens, Luhn-valid       | all but last 4 hidden    |
//! | 4 | `passport`     | letter + 7 digits, or 9 alphanumerics          | all but last 4 hidden    |
//! | 5 | `national_id`  | 12 digits                                      | all but last 4 hidden    |
//! | 6 | `bank_account` | 8-14 digits                                    | all but last 4 hidden    |
//!
//! ## Usage Example
//!
//! ```rust
//! use piimask_core::{Pipeline, RedactionEngine};
//!
//! let pipeline = Pipeline::standard().expect("standard catalog compiles");
//! let masked = pipeline.redact("Contact john.doe@example.com or +1 2345678901.");
//! assert_eq!(masked, "Contact ********@example.com or +* ****678901.");
//! ```
//!
//! ## Error Handling
//!
//! Masking itself cannot fail. Building a catalog can, when a pattern does not
//! compile or a configuration names an unknown category; those are reported as
//! [`PiiMaskError`]. Helpers that touch the filesystem return `anyhow::Result`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod masking;
pub mod pipeline;
pub mod redaction_match;
pub mod validators;

/// Re-exports the category catalog types.
pub use catalog::{standard_catalog, Catalog, Category, CategoryRule, Validator};

/// Re-exports category selection.
pub use config::CatalogConfig;

/// Re-exports the custom error type for clear error reporting.
pub use errors::PiiMaskError;

/// Re-exports the engine trait and its pipeline implementation.
pub use engine::RedactionEngine;
pub use pipeline::{segment_pass, Pipeline};

pub use masking::{mask_email, mask_keep_last_four, mask_phone, MaskStrategy, MASK_CHAR};

/// Re-exports types for match reporting.
pub use redaction_match::{RedactionMatch, RedactionReport, RedactionSummaryItem, Segment};

/// Re-exports the one-shot helpers.
pub use headless::{redact_text, redact_text_with_config};

pub use validators::{is_valid_luhn, is_valid_payment_card};
