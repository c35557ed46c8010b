// piimask-core/src/redaction_match.rs
//! Data structures describing what a pipeline pass found, plus helpers for
//! logging matches without leaking the matched values.

use log::debug;
use serde::Serialize;

use lazy_static::lazy_static;

use crate::catalog::Category;

lazy_static! {
    /// Whether raw matched values may appear in debug logs. Read once.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("PIIMASK_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One pattern match found during a single pass.
///
/// Offsets are byte offsets into the text that pass scanned, which is the
/// output of the previous pass rather than the original input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactionMatch {
    pub category: Category,
    #[serde(skip)]
    pub raw_text: String,
    pub start: usize,
    pub end: usize,
    /// The replacement, or `None` when the category's validator rejected the match.
    pub masked: Option<String>,
}

impl RedactionMatch {
    pub fn is_masked(&self) -> bool {
        self.masked.is_some()
    }
}

/// A piece of a pass's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim from the pass input.
    Unchanged(&'a str),
    /// A masked replacement for a matched span.
    Replaced(String),
}

impl Segment<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Unchanged(s) => s,
            Segment::Replaced(s) => s.as_str(),
        }
    }
}

/// Concatenates segments into the pass output.
pub fn join_segments(segments: &[Segment<'_>]) -> String {
    let capacity = segments.iter().map(|s| s.as_str().len()).sum();
    let mut out = String::with_capacity(capacity);
    for segment in segments {
        out.push_str(segment.as_str());
    }
    out
}

/// Per-category totals for one `redact` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedactionSummaryItem {
    pub category: Category,
    /// Matches that were masked.
    pub occurrences: usize,
    /// Matches the category validator rejected. A later category may still
    /// mask the same digits.
    pub rejected: usize,
    /// Masked replacements, in the order they were produced.
    pub masked_samples: Vec<String>,
}

/// Summary of a full pipeline run, one item per category that matched anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedactionReport {
    pub items: Vec<RedactionSummaryItem>,
}

impl RedactionReport {
    /// Folds a pass's matches into the report.
    pub fn record(&mut self, category: Category, matches: &[RedactionMatch]) {
        if matches.is_empty() {
            return;
        }
        let position = match self.items.iter().position(|item| item.category == category) {
            Some(position) => position,
            None => {
                self.items.push(RedactionSummaryItem {
                    category,
                    occurrences: 0,
                    rejected: 0,
                    masked_samples: Vec::new(),
                });
                self.items.len() - 1
            }
        };
        let item = &mut self.items[position];
        for m in matches {
            match &m.masked {
                Some(masked) => {
                    item.occurrences += 1;
                    item.masked_samples.push(masked.clone());
                }
                None => item.rejected += 1,
            }
        }
    }

    /// Total masked matches across all categories.
    pub fn total_masked(&self) -> usize {
        self.items.iter().map(|item| item.occurrences).sum()
    }

    /// Total validator rejections across all categories.
    pub fn total_rejected(&self) -> usize {
        self.items.iter().map(|item| item.rejected).sum()
    }

    pub fn get(&self, category: Category) -> Option<&RedactionSummaryItem> {
        self.items.iter().find(|item| item.category == category)
    }
}

/// Placeholder used in logs instead of a sensitive value.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_masked_match_debug(module_path: &str, m: &RedactionMatch) {
    debug!(
        "{} Masked {} at {}..{}: Original='{}', Masked='{}'",
        module_path,
        m.category,
        m.start,
        m.end,
        get_loggable_content(&m.raw_text),
        m.masked.as_deref().unwrap_or_default()
    );
}

pub fn log_rejected_match_debug(module_path: &str, m: &RedactionMatch) {
    debug!(
        "{} Validation rejected {} candidate at {}..{}: '{}'",
        module_path,
        m.category,
        m.start,
        m.end,
        get_loggable_content(&m.raw_text)
    );
}
