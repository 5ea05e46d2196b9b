//! Structural validators for in-progress field values.
//!
//! These judge the *digit-only* form of a field while the user is still
//! typing, so the interesting outcome is rarely a clean pass/fail: a value
//! is usually on its way somewhere. Each validator returns a [`Verdict`]
//! with a tri-state classification plus a `finished` flag that tells the
//! UI it may advance focus to the next field.
//!
//! There is deliberately no error type here. A keystroke must never fail;
//! every input maps to a verdict (spurious input just maps to
//! [`ValidationState::Invalid`]).

use crate::brand::{CardBrand, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::digits::strip_non_digits;
use crate::luhn;
use std::time::{SystemTime, UNIX_EPOCH};

/// Structural classification of an in-progress value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    /// The value can never become valid by appending more input.
    Invalid,
    /// The value is a prefix of a potentially valid value.
    Incomplete,
    /// The value is structurally valid as it stands.
    Valid,
}

/// A validator's verdict on a digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The tri-state classification.
    pub state: ValidationState,
    /// True when no further input is expected; drives focus advance.
    pub finished: bool,
}

impl Verdict {
    pub(crate) const fn invalid() -> Self {
        Self {
            state: ValidationState::Invalid,
            finished: false,
        }
    }

    pub(crate) const fn incomplete() -> Self {
        Self {
            state: ValidationState::Incomplete,
            finished: false,
        }
    }

    pub(crate) const fn valid(finished: bool) -> Self {
        Self {
            state: ValidationState::Valid,
            finished,
        }
    }

    /// True if the value can never become valid.
    pub const fn is_invalid(&self) -> bool {
        matches!(self.state, ValidationState::Invalid)
    }
}

/// Validates an in-progress card number.
///
/// Expects a digit-only string (the composer extracts digits first).
///
/// - A non-digit character or a number longer than the brand allows is
///   `Invalid`.
/// - Below the brand's shortest complete length, the value is `Incomplete`.
/// - At a complete length, the Luhn checksum decides: a pass is `Valid`
///   (`finished` once no longer number is possible for the brand), a fail
///   is `Invalid` at the maximum length and `Incomplete` while more digits
///   could still fix it.
///
/// # Example
///
/// ```
/// use card_field::{validate_card_number, ValidationState};
///
/// assert_eq!(validate_card_number("4242").state, ValidationState::Incomplete);
///
/// let full = validate_card_number("4242424242424242");
/// assert_eq!(full.state, ValidationState::Valid);
/// assert!(full.finished);
///
/// assert!(validate_card_number("4242424242424241").is_invalid());
/// ```
pub fn validate_card_number(digits: &str) -> Verdict {
    if digits.is_empty() {
        return Verdict::incomplete();
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Verdict::invalid();
    }

    let brand = CardBrand::detect(digits);
    let length = digits.len();
    let (min, max) = match brand {
        Some(brand) => (brand.min_length(), brand.max_length()),
        None => (MIN_CARD_DIGITS, MAX_CARD_DIGITS),
    };

    if length > max {
        return Verdict::invalid();
    }
    if length < min {
        return Verdict::incomplete();
    }

    let complete_length = match brand {
        Some(brand) => brand.is_valid_length(length),
        None => true,
    };
    if !complete_length {
        return Verdict::incomplete();
    }

    if luhn::is_valid(digits) {
        Verdict::valid(length == max)
    } else if length == max {
        Verdict::invalid()
    } else {
        // A checksum failure at an intermediate complete length may just
        // mean the user is not done typing.
        Verdict::incomplete()
    }
}

/// Validates an in-progress expiry date given as MMYY digits.
///
/// - Empty input is `Incomplete`.
/// - A month that can never be 01-12 is `Invalid` as soon as it is decided.
/// - Fewer than four digits is `Incomplete`.
/// - At four digits, an out-of-range month or a date in the past is
///   `Invalid`; otherwise `Valid` and `finished`.
/// - More than four digits is `Invalid`.
///
/// # Example
///
/// ```
/// use card_field::{validate_expiry, ValidationState};
///
/// assert_eq!(validate_expiry("12").state, ValidationState::Incomplete);
/// assert!(validate_expiry("1340").is_invalid());
/// assert!(validate_expiry("1240").finished);
/// ```
pub fn validate_expiry(digits: &str) -> Verdict {
    let bytes = digits.as_bytes();
    if bytes.is_empty() {
        return Verdict::incomplete();
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Verdict::invalid();
    }
    if bytes.len() > 4 {
        return Verdict::invalid();
    }
    if bytes.len() == 1 {
        // A single leading digit is always salvageable: the formatter
        // zero-pads anything above 1.
        return Verdict::incomplete();
    }

    let month = (bytes[0] - b'0') as u16 * 10 + (bytes[1] - b'0') as u16;
    if month == 0 || month > 12 {
        return Verdict::invalid();
    }
    if bytes.len() < 4 {
        return Verdict::incomplete();
    }

    let year = 2000 + (bytes[2] - b'0') as u16 * 10 + (bytes[3] - b'0') as u16;
    let (current_year, current_month) = current_year_month();
    if year < current_year || (year == current_year && month < current_month as u16) {
        return Verdict::invalid();
    }
    Verdict::valid(true)
}

/// Validates an in-progress CVC against the card number it belongs to.
///
/// The expected length depends on the brand of `card_number` (4 for Amex,
/// 3 otherwise); while the brand is unknown both 3 and 4 digits are
/// accepted, with `finished` only at 4.
///
/// # Example
///
/// ```
/// use card_field::validate_cvc;
///
/// let verdict = validate_cvc("4242424242424242", "123");
/// assert!(verdict.finished);
///
/// // Too long for a Visa.
/// assert!(validate_cvc("4242424242424242", "1234").is_invalid());
/// ```
pub fn validate_cvc(card_number: &str, digits: &str) -> Verdict {
    if digits.is_empty() {
        return Verdict::incomplete();
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Verdict::invalid();
    }

    let brand = CardBrand::detect(&strip_non_digits(card_number));
    let (min, max) = match brand {
        Some(brand) => {
            let expected = brand.cvc_length();
            (expected, expected)
        }
        None => (3, 4),
    };

    if digits.len() < min {
        Verdict::incomplete()
    } else if digits.len() > max {
        Verdict::invalid()
    } else {
        Verdict::valid(digits.len() == max)
    }
}

/// Current (year, month), derived from the system clock.
///
/// The approximation ignores leap years, which is fine at month
/// granularity for expiry checks.
fn current_year_month() -> (u16, u8) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let days = secs / 86400;
    let years = days / 365;
    let year = 1970 + years as u16;

    let day_of_year = days % 365;
    let month = (day_of_year / 30).min(11) as u8 + 1;

    (year, month)
}
