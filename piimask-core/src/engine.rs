// piimask-core/src/engine.rs
//! Defines the `RedactionEngine` trait.
//!
//! Front ends (the CLI, tests, embedding applications) depend on this trait
//! rather than on [`Pipeline`](crate::pipeline::Pipeline) directly, so they
//! only rely on the `redact(text) -> text` contract.
//!
//! License: MIT OR APACHE 2.0

use crate::catalog::Catalog;
use crate::redaction_match::RedactionReport;

/// A detection-and-masking engine.
///
/// Implementations hold no per-call state; a single engine may be shared
/// across threads and called concurrently on different texts.
pub trait RedactionEngine: Send + Sync {
    /// Masks every sensitive span in `content`.
    ///
    /// Total and deterministic: any input, including the empty string, yields
    /// an output.
    fn redact(&self, content: &str) -> String;

    /// Same output as [`redact`](Self::redact), plus a per-category report of
    /// what was masked and what each category's validator rejected.
    fn redact_with_report(&self, content: &str) -> (String, RedactionReport);

    /// The catalog this engine applies.
    fn catalog(&self) -> &Catalog;
}
