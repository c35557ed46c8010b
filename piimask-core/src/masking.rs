// File: piimask-core/src/masking.rs
//! Masking strategies: pure functions from a matched substring to the text
//! that replaces it.
//!
//! Phone and email masks keep the shape of the match character for character.
//! The generic keep-last-four mask strips separators, so its output can be
//! shorter than the match.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;

/// The character written over every hidden position.
pub const MASK_CHAR: char = '*';

/// Number of leading digits hidden in a phone number.
pub const PHONE_MASKED_DIGITS: usize = 5;

/// Number of trailing alphanumerics left visible by [`mask_keep_last_four`].
pub const VISIBLE_TAIL: usize = 4;

/// The masking shape attached to a category rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskStrategy {
    /// Hide the first five digits, keep everything else in place.
    Phone,
    /// Hide the whole local part, keep `@` and the domain.
    Email,
    /// Drop separators, hide all but the last four alphanumerics.
    KeepLastFour,
}

impl MaskStrategy {
    /// Applies this strategy to a raw match.
    pub fn apply(&self, raw_match: &str) -> String {
        match self {
            MaskStrategy::Phone => mask_phone(raw_match),
            MaskStrategy::Email => mask_email(raw_match),
            MaskStrategy::KeepLastFour => mask_keep_last_four(raw_match),
        }
    }
}

/// Masks the first five ASCII digits of a phone number.
///
/// Separators, a leading `+` and any digits after the fifth are copied in
/// their original positions.
///
/// ```
/// use piimask_core::masking::mask_phone;
/// assert_eq!(mask_phone("+1 2345678901"), "+* ****678901");
/// ```
pub fn mask_phone(phone: &str) -> String {
    let mut masked = String::with_capacity(phone.len());
    let mut digits_masked = 0;
    for c in phone.chars() {
        if c.is_ascii_digit() && digits_masked < PHONE_MASKED_DIGITS {
            masked.push(MASK_CHAR);
            digits_masked += 1;
        } else {
            masked.push(c);
        }
    }
    masked
}

/// Replaces every character of the local part (before the first `@`) with `*`.
///
/// Input without an `@` is returned unchanged.
pub fn mask_email(email: &str) -> String {
    let Some(at_index) = email.find('@') else {
        return email.to_string();
    };
    let (local, domain) = email.split_at(at_index);
    let mut masked: String = local.chars().map(|_| MASK_CHAR).collect();
    masked.push_str(domain);
    masked
}

/// Generic mask for card, passport, national id and bank account numbers.
///
/// Non-alphanumeric characters are removed first. With `L` remaining
/// characters, values of length 4 or less are fully masked; otherwise the
/// first `L - 4` become `*` and the last four are kept.
pub fn mask_keep_last_four(raw_match: &str) -> String {
    let kept: Vec<char> = raw_match.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let len = kept.len();
    if len <= VISIBLE_TAIL {
        return MASK_CHAR.to_string().repeat(len);
    }

    let hidden = len - VISIBLE_TAIL;
    let mut masked = String::with_capacity(len);
    masked.extend(std::iter::repeat(MASK_CHAR).take(hidden));
    masked.extend(&kept[hidden..]);
    masked
}
