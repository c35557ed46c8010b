//! errors.rs - Custom error types for the piimask-core library.
//!
//! Detection and masking never fail at runtime. The only errors this crate
//! produces come from building the category catalog or loading its config.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `piimask-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PiiMaskError {
    #[error("Failed to compile detection pattern for category '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Unknown category '{0}' (expected one of: phone, email, payment_card, passport, national_id, bank_account)")]
    UnknownCategory(String),

    #[error("Failed to parse catalog configuration: {0}")]
    ConfigParse(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
