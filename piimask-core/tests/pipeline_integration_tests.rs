// piimask-core/tests/pipeline_integration_tests.rs
//! End-to-end behavior of the standard pipeline: per-category masking,
//! validation, cross-category ordering and re-masking.

use std::sync::Arc;

use anyhow::Result;
use test_log::test;

use piimask_core::{Category, Pipeline, RedactionEngine};

fn redact(input: &str) -> String {
    Pipeline::standard().expect("standard catalog compiles").redact(input)
}

const FORM_INPUT: &str = "\
Email: john.doe@example.com
Phone Number: +1 2345678901
Credit Card Number: 4532015112830366
Passport Number: A1234567
Resident ID: 123456789012
Bank Account Number: 12345678
";

const FORM_OUTPUT: &str = "\
Email: ********@example.com
Phone Number: +* ****678901
Credit Card Number: ************0366
Passport Number: ****4567
Resident ID: ********9012
Bank Account Number: ****5678
";

#[test]
fn test_labeled_form_is_masked_per_category() {
    assert_eq!(redact(FORM_INPUT), FORM_OUTPUT);
}

#[test]
fn test_luhn_valid_card_is_masked() {
    assert_eq!(redact("Card: 4532015112830366"), "Card: ************0366");
}

#[test]
fn test_luhn_invalid_card_is_left_unmasked() {
    assert_eq!(redact("Card: 4532015112830367"), "Card: 4532015112830367");
}

#[test]
fn test_grouped_card_drops_separators() {
    assert_eq!(redact("pay 4532 0151 1283 0366 today"), "pay ************0366 today");
    assert_eq!(redact("pay 4532-0151-1283-0366."), "pay ************0366.");
}

#[test]
fn test_email_local_part_is_fully_masked() {
    assert_eq!(redact("john.doe@example.com"), "********@example.com");
}

#[test]
fn test_phone_first_five_digits_masked() {
    assert_eq!(redact("+1 2345678901"), "+* ****678901");
    assert_eq!(redact("call 2345678901 today"), "call *****78901 today");
}

#[test]
fn test_national_id_and_bank_account() {
    assert_eq!(redact("123456789012"), "********9012");
    assert_eq!(redact("12345678"), "****5678");
}

#[test]
fn test_short_numbers_pass_through() {
    assert_eq!(redact("Room 123, floor 7"), "Room 123, floor 7");
}

#[test]
fn test_text_outside_matches_is_untouched() {
    let input = "Hello, world! Nothing to see: 42 apples.\n\tTabs & symbols: <>{}[]";
    assert_eq!(redact(input), input);

    let unicode = "Grüße, 日本語 text 12345678 ende";
    assert_eq!(redact(unicode), "Grüße, 日本語 text ****5678 ende");
}

#[test]
fn test_phone_and_email_preserve_length() {
    for input in ["+44 7700900123", "a.b-c@d.co", "+1 2345678901", "x_y%z+w@mail.example.org"] {
        let out = redact(input);
        assert_eq!(out.len(), input.len(), "{input} -> {out}");
        assert_ne!(out, input);
    }
}

#[test]
fn test_generic_categories_may_shrink_text() {
    let input = "4532 0151 1283 0366";
    assert!(redact(input).len() < input.len());
}

#[test]
fn test_catalog_order_claims_ambiguous_tokens() -> Result<()> {
    let pipeline = Pipeline::standard()?;

    // 10 digits: phone runs first and hides the first five.
    assert_eq!(pipeline.redact("1234567890"), "*****67890");

    // 9 digits and 9-letter words both have the passport shape.
    let (out, report) = pipeline.redact_with_report("123456789 something");
    assert_eq!(out, "*****6789 *****hing");
    assert_eq!(report.get(Category::Passport).map(|i| i.occurrences), Some(2));
    assert!(report.get(Category::BankAccount).is_none());

    // 12 digits are claimed by the national identifier rule, not the bank rule.
    let (_, report) = pipeline.redact_with_report("123456789012");
    assert!(report.get(Category::NationalId).is_some());
    assert!(report.get(Category::BankAccount).is_none());

    // A Luhn-valid 13-digit number is a card; a Luhn-invalid one falls through
    // to the bank account rule.
    let (out, report) = pipeline.redact_with_report("4222222222222 1234567890123");
    assert_eq!(out, "*********2222 *********0123");
    let card = report.get(Category::PaymentCard).unwrap();
    assert_eq!((card.occurrences, card.rejected), (1, 1));
    assert_eq!(report.get(Category::BankAccount).map(|i| i.occurrences), Some(1));
    Ok(())
}

#[test]
fn test_rejected_card_span_is_not_retried_shorter() -> Result<()> {
    // The card pattern is greedy, so a valid 16-digit card followed by a
    // separator and three more digits is matched as one 19-digit span. That
    // span fails Luhn and is left as it is; no shorter span is tried.
    let input = "Card 4532015112830366 123 cvv";
    let (out, report) = Pipeline::standard()?.redact_with_report(input);
    assert_eq!(out, input);
    let card = report.get(Category::PaymentCard).unwrap();
    assert_eq!((card.occurrences, card.rejected), (0, 1));
    Ok(())
}

#[test]
fn test_later_pass_can_claim_phone_remainder() {
    // With a 3-digit country code the phone mask leaves 8 digits visible,
    // which the bank account pass then masks within the same call.
    assert_eq!(redact("+123 2345678901"), "+*** ******8901");
    // A 2-digit code leaves 7 digits, below every later minimum.
    assert_eq!(redact("+44 7700900123"), "+** ***0900123");
}

#[test]
fn test_remasking_leaves_masked_form_unchanged() {
    let once = redact(FORM_INPUT);
    let twice = redact(&once);
    assert_eq!(twice, once);

    let once = redact("+123 2345678901");
    assert_eq!(redact(&once), once);
}

#[test]
fn test_pipeline_is_shareable_across_threads() -> Result<()> {
    let pipeline = Arc::new(Pipeline::standard()?);
    let inputs = ["a@b.io", "12345678", "4532015112830366", "plain text"];

    std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let pipeline = Arc::clone(&pipeline);
                scope.spawn(move || pipeline.redact(input))
            })
            .collect();
        let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(outputs, vec!["*@b.io", "****5678", "************0366", "plain text"]);
    });
    Ok(())
}
