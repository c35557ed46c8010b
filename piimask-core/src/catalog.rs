//! catalog.rs - The ordered set of detection rules.
//!
//! Each [`CategoryRule`] pairs a compiled, word-bounded pattern with an
//! optional validator and a [`MaskStrategy`]. The standard catalog runs in a
//! fixed order because later passes see text that earlier passes already
//! masked: a 12-digit run is claimed by the national identifier rule before the
//! bank account rule sees it, a 9-digit run by the passport rule, and so on.
//!
//! The standard catalog is compiled once per process and shared through an
//! `Arc`.
//!
//! License: MIT OR APACHE 2.0

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::config::CatalogConfig;
use crate::errors::PiiMaskError;
use crate::masking::MaskStrategy;
use crate::validators;

/// 10 digits, optionally preceded by a 1-3 digit country code (with or
/// without `+`) and a single space or hyphen.
pub const PHONE_PATTERN: &str = r"(?:(?:\+|\b)[0-9]{1,3}[- ])?\b[0-9]{10}\b";

/// Local part, `@`, dotted domain, alphabetic top-level label of 2+ letters.
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// 13-19 digits with at most one space or hyphen between any two digits.
pub const PAYMENT_CARD_PATTERN: &str = r"\b[0-9](?:[ -]?[0-9]){12,18}\b";

/// One letter and 7 digits, or any 9 alphanumerics.
pub const PASSPORT_PATTERN: &str = r"\b(?:[A-Za-z][0-9]{7}|[A-Za-z0-9]{9})\b";

/// Exactly 12 digits.
pub const NATIONAL_ID_PATTERN: &str = r"\b[0-9]{12}\b";

/// 8 to 14 digits.
pub const BANK_ACCOUNT_PATTERN: &str = r"\b[0-9]{8,14}\b";

/// Upper bound on the compiled size of a single category regex.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A predicate run on a raw match before it is masked.
pub type Validator = fn(&str) -> bool;

/// A class of sensitive data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Phone,
    Email,
    PaymentCard,
    Passport,
    NationalId,
    BankAccount,
}

impl Category {
    /// All categories in standard catalog order.
    pub const ALL: [Category; 6] = [
        Category::Phone,
        Category::Email,
        Category::PaymentCard,
        Category::Passport,
        Category::NationalId,
        Category::BankAccount,
    ];

    /// Stable identifier used in configuration files, logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Phone => "phone",
            Category::Email => "email",
            Category::PaymentCard => "payment_card",
            Category::Passport => "passport",
            Category::NationalId => "national_id",
            Category::BankAccount => "bank_account",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Phone => "Phone number",
            Category::Email => "Email address",
            Category::PaymentCard => "Payment card number",
            Category::Passport => "Passport number",
            Category::NationalId => "National identifier",
            Category::BankAccount => "Bank account number",
        }
    }

    fn definition(&self) -> (&'static str, Option<Validator>, MaskStrategy) {
        match self {
            Category::Phone => (PHONE_PATTERN, None, MaskStrategy::Phone),
            Category::Email => (EMAIL_PATTERN, None, MaskStrategy::Email),
            Category::PaymentCard => (
                PAYMENT_CARD_PATTERN,
                Some(validators::is_valid_payment_card as Validator),
                MaskStrategy::KeepLastFour,
            ),
            Category::Passport => (PASSPORT_PATTERN, None, MaskStrategy::KeepLastFour),
            Category::NationalId => (NATIONAL_ID_PATTERN, None, MaskStrategy::KeepLastFour),
            Category::BankAccount => (BANK_ACCOUNT_PATTERN, None, MaskStrategy::KeepLastFour),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = PiiMaskError;

    /// Accepts the canonical names plus a few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "phone" | "phone_number" => Ok(Category::Phone),
            "email" | "email_address" => Ok(Category::Email),
            "payment_card" | "credit_card" | "card" => Ok(Category::PaymentCard),
            "passport" | "passport_number" => Ok(Category::Passport),
            "national_id" | "resident_id" => Ok(Category::NationalId),
            "bank_account" | "bank_account_number" => Ok(Category::BankAccount),
            _ => Err(PiiMaskError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single compiled detection rule.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// The category this rule detects.
    pub category: Category,
    /// Word-bounded detection pattern.
    pub regex: Regex,
    /// Extra check on raw matches. A rejected match is left unmasked.
    pub validator: Option<Validator>,
    /// How accepted matches are masked.
    pub mask: MaskStrategy,
}

impl CategoryRule {
    /// Compiles `pattern` into a rule for `category`.
    pub fn compile(
        category: Category,
        pattern: &str,
        validator: Option<Validator>,
        mask: MaskStrategy,
    ) -> Result<Self, PiiMaskError> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|e| PiiMaskError::RuleCompilationError(category.name().to_string(), e))?;

        debug!(
            target: "piimask_core::catalog",
            "Rule '{}' compiled successfully.",
            category
        );

        Ok(Self { category, regex, validator, mask })
    }

    /// Compiles the built-in rule for `category`.
    pub fn standard(category: Category) -> Result<Self, PiiMaskError> {
        let (pattern, validator, mask) = category.definition();
        Self::compile(category, pattern, validator, mask)
    }

    /// Returns `true` when the raw match may be masked.
    pub fn accepts(&self, raw_match: &str) -> bool {
        self.validator.map_or(true, |validate| validate(raw_match))
    }
}

/// An immutable, ordered collection of category rules.
#[derive(Debug, Clone)]
pub struct Catalog {
    rules: Vec<CategoryRule>,
}

static STANDARD_CATALOG: OnceCell<Arc<Catalog>> = OnceCell::new();

impl Catalog {
    /// Compiles all six built-in rules in their fixed order.
    ///
    /// Every category is attempted; if any pattern fails to compile the errors
    /// are reported together.
    pub fn standard() -> Result<Self, PiiMaskError> {
        debug!("Starting compilation of {} category rules.", Category::ALL.len());

        let mut rules = Vec::with_capacity(Category::ALL.len());
        let mut compilation_errors = Vec::new();
        for category in Category::ALL {
            match CategoryRule::standard(category) {
                Ok(rule) => rules.push(rule),
                Err(e) => compilation_errors.push(e),
            }
        }

        match compilation_errors.len() {
            0 => Ok(Self { rules }),
            1 => Err(compilation_errors.remove(0)),
            n => {
                let error_message = compilation_errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<String>>()
                    .join("\n");
                Err(PiiMaskError::Fatal(format!("Failed to compile {} rule(s):\n{}", n, error_message)))
            }
        }
    }

    /// Builds a catalog from explicitly constructed rules, kept in the given order.
    pub fn from_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Returns a catalog restricted to the categories `config` leaves active.
    ///
    /// Relative order is preserved. Unknown category names are an error.
    pub fn select(&self, config: &CatalogConfig) -> Result<Self, PiiMaskError> {
        let active = config.active_categories()?;
        let rules: Vec<CategoryRule> = self
            .rules
            .iter()
            .filter(|rule| active.contains(&rule.category))
            .cloned()
            .collect();
        debug!("Selected {} of {} category rules.", rules.len(), self.rules.len());
        Ok(Self { rules })
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Looks up the rule for a category, if present.
    pub fn get(&self, category: Category) -> Option<&CategoryRule> {
        self.rules.iter().find(|rule| rule.category == category)
    }

    /// Categories in application order.
    pub fn categories(&self) -> Vec<Category> {
        self.rules.iter().map(|rule| rule.category).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Returns the process-wide standard catalog, compiling it on first use.
pub fn standard_catalog() -> Result<Arc<Catalog>, PiiMaskError> {
    STANDARD_CATALOG
        .get_or_try_init(|| {
            debug!("Standard catalog not yet compiled. Compiling now.");
            Catalog::standard().map(Arc::new)
        })
        .map(Arc::clone)
}
