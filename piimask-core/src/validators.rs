// File: piimask-core/src/validators.rs
//! Programmatic validation applied to raw matches before masking.
//!
//! A shape match alone is not enough for payment cards: any 13-19 digit run
//! looks like one. The checks here reject numbers that cannot be real so they
//! are passed through unmasked.
//!
//! License: MIT OR APACHE 2.0

/// Shortest digit count accepted as a payment card.
pub const MIN_CARD_DIGITS: usize = 13;
/// Longest digit count accepted as a payment card.
pub const MAX_CARD_DIGITS: usize = 19;

/// Validates a number using the Luhn algorithm.
///
/// Starting from the rightmost digit and moving left, every second digit is
/// doubled (subtracting 9 when the result exceeds 9) and all digits are summed.
/// The number is valid when the sum is divisible by 10.
///
/// # Arguments
///
/// * `num_str` - A string slice containing only ASCII digits.
///
/// # Returns
///
/// `true` if the number passes the checksum, `false` otherwise. Any non-digit
/// character, or an empty input, makes the number invalid.
pub fn is_valid_luhn(num_str: &str) -> bool {
    if num_str.is_empty() {
        return false;
    }

    let mut sum = 0;
    let mut alternate = false;

    for c in num_str.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

/// Validates a raw payment-card match.
///
/// Strips spaces and hyphens (any non-digit), requires 13 to 19 remaining
/// digits, then applies [`is_valid_luhn`].
pub fn is_valid_payment_card(raw_match: &str) -> bool {
    let digits: String = raw_match.chars().filter(|c| c.is_ascii_digit()).collect();
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return false;
    }
    is_valid_luhn(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_valid_numbers() {
        assert!(is_valid_luhn("4532015112830366"));
        assert!(is_valid_luhn("4111111111111111"));
        assert!(is_valid_luhn("378282246310005"));
        assert!(is_valid_luhn("79927398713"));
    }

    #[test]
    fn luhn_rejects_off_by_one_checksum() {
        assert!(!is_valid_luhn("4532015112830367"));
        assert!(!is_valid_luhn("4111111111111112"));
    }

    #[test]
    fn luhn_rejects_non_digits_and_empty() {
        assert!(!is_valid_luhn(""));
        assert!(!is_valid_luhn("4532-0151"));
        assert!(!is_valid_luhn("45320151128303a6"));
    }

    #[test]
    fn payment_card_ignores_separators() {
        assert!(is_valid_payment_card("4532 0151 1283 0366"));
        assert!(is_valid_payment_card("4532-0151-1283-0366"));
        assert!(!is_valid_payment_card("4532 0151 1283 0367"));
    }

    #[test]
    fn payment_card_enforces_digit_count() {
        // Luhn-valid but far too short to be a card.
        assert!(!is_valid_payment_card("79927398713"));
        // 20 digits.
        assert!(!is_valid_payment_card("45320151128303664532"));
        assert!(is_valid_payment_card("4222222222222"));
    }
}
