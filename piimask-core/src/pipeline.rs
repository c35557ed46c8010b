// piimask-core/src/pipeline.rs
//! The multi-pass masking pipeline.
//!
//! Each catalog rule runs as one pass over the output of the previous pass.
//! A pass finds non-overlapping, leftmost-first matches and turns the text
//! into a list of [`Segment`]s: untouched text, matches its validator
//! rejected, and masked replacements. Concatenating the segments gives the
//! next pass's input.
//!
//! Because passes are chained, the catalog order decides which category claims
//! an ambiguous token. Masked digits become `*` and stop matching digit-based
//! patterns in later passes.
//!
//! License: MIT OR APACHE 2.0

use std::sync::Arc;

use log::debug;

use crate::catalog::{standard_catalog, Catalog, CategoryRule};
use crate::engine::RedactionEngine;
use crate::errors::PiiMaskError;
use crate::redaction_match::{
    join_segments, log_masked_match_debug, log_rejected_match_debug, RedactionMatch, RedactionReport, Segment,
};

/// Applies a [`Catalog`] to text, rule by rule.
#[derive(Debug, Clone)]
pub struct Pipeline {
    catalog: Arc<Catalog>,
}

impl Pipeline {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// A pipeline over the shared standard catalog.
    pub fn standard() -> Result<Self, PiiMaskError> {
        Ok(Self::new(standard_catalog()?))
    }

    fn run(&self, content: &str, mut report: Option<&mut RedactionReport>) -> String {
        let mut current = content.to_string();

        for rule in self.catalog.rules() {
            let next = {
                let (segments, matches) = segment_pass(rule, &current);
                let masked = matches.iter().filter(|m| m.is_masked()).count();
                debug!(
                    target: "piimask_core::pipeline",
                    "Pass '{}': {} masked, {} rejected.",
                    rule.category,
                    masked,
                    matches.len() - masked
                );
                if let Some(report) = report.as_deref_mut() {
                    report.record(rule.category, &matches);
                }
                if masked == 0 {
                    continue;
                }
                join_segments(&segments)
            };
            current = next;
        }

        current
    }
}

/// Runs a single rule over `text` and splits it into segments.
///
/// Returns the segments (whose concatenation is the pass output) and every
/// match found, including those the rule's validator rejected.
pub fn segment_pass<'t>(rule: &CategoryRule, text: &'t str) -> (Vec<Segment<'t>>, Vec<RedactionMatch>) {
    let module_path = "piimask_core::pipeline";
    let mut segments = Vec::new();
    let mut matches = Vec::new();
    let mut last_end = 0usize;

    for found in rule.regex.find_iter(text) {
        let raw = found.as_str();
        if found.start() > last_end {
            segments.push(Segment::Unchanged(&text[last_end..found.start()]));
        }

        let masked = rule.accepts(raw).then(|| rule.mask.apply(raw));
        let m = RedactionMatch {
            category: rule.category,
            raw_text: raw.to_string(),
            start: found.start(),
            end: found.end(),
            masked,
        };

        match &m.masked {
            Some(replacement) => {
                log_masked_match_debug(module_path, &m);
                segments.push(Segment::Replaced(replacement.clone()));
            }
            None => {
                log_rejected_match_debug(module_path, &m);
                segments.push(Segment::Unchanged(raw));
            }
        }
        last_end = found.end();
        matches.push(m);
    }

    if last_end < text.len() {
        segments.push(Segment::Unchanged(&text[last_end..]));
    }

    (segments, matches)
}

impl RedactionEngine for Pipeline {
    fn redact(&self, content: &str) -> String {
        self.run(content, None)
    }

    fn redact_with_report(&self, content: &str) -> (String, RedactionReport) {
        let mut report = RedactionReport::default();
        let redacted = self.run(content, Some(&mut report));
        (redacted, report)
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::config::CatalogConfig;

    fn pipeline() -> Pipeline {
        Pipeline::standard().unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(pipeline().redact(""), "");
    }

    #[test]
    fn segment_pass_splits_unchanged_and_replaced_spans() {
        let rule = CategoryRule::standard(Category::BankAccount).unwrap();
        let (segments, matches) = segment_pass(&rule, "acct 12345678, ref 87654321");
        assert_eq!(
            segments,
            vec![
                Segment::Unchanged("acct "),
                Segment::Replaced("****5678".to_string()),
                Segment::Unchanged(", ref "),
                Segment::Replaced("****4321".to_string()),
            ]
        );
        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].start, matches[0].end), (5, 13));
    }

    #[test]
    fn segment_pass_keeps_rejected_card_verbatim() {
        let rule = CategoryRule::standard(Category::PaymentCard).unwrap();
        let (segments, matches) = segment_pass(&rule, "card 4532015112830367");
        assert_eq!(
            segments,
            vec![Segment::Unchanged("card "), Segment::Unchanged("4532015112830367")]
        );
        assert_eq!(matches.len(), 1);
        assert!(!matches[0].is_masked());
        assert_eq!(join_segments(&segments), "card 4532015112830367");
    }

    #[test]
    fn segment_pass_without_matches_is_one_segment() {
        let rule = CategoryRule::standard(Category::Email).unwrap();
        let (segments, matches) = segment_pass(&rule, "nothing here");
        assert_eq!(segments, vec![Segment::Unchanged("nothing here")]);
        assert!(matches.is_empty());
    }

    #[test]
    fn report_matches_redact_output() {
        let p = pipeline();
        let input = "mail a.b@example.com, card 4532015112830366, bad 4532015112830367";
        let (redacted, report) = p.redact_with_report(input);
        assert_eq!(redacted, p.redact(input));
        assert_eq!(report.get(Category::Email).unwrap().occurrences, 1);
        let card = report.get(Category::PaymentCard).unwrap();
        assert_eq!(card.occurrences, 1);
        assert_eq!(card.rejected, 1);
        assert_eq!(card.masked_samples, vec!["************0366"]);
    }

    #[test]
    fn selected_catalog_skips_disabled_categories() {
        let config = CatalogConfig { enable: vec![], disable: vec!["email".into()] };
        let catalog = standard_catalog().unwrap().select(&config).unwrap();
        let p = Pipeline::new(Arc::new(catalog));
        assert_eq!(p.redact("x@example.com 12345678"), "x@example.com ****5678");
    }

    #[test]
    fn empty_catalog_is_identity() {
        let p = Pipeline::new(Arc::new(Catalog::from_rules(Vec::new())));
        assert_eq!(p.redact("john@example.com 2345678901"), "john@example.com 2345678901");
    }
}
