//! Digit extraction with cursor remapping.
//!
//! Formatting separators are a display concern only; every validator and
//! formatter in this crate operates on the digit-only form of a field. The
//! extractor strips non-digits and maps the cursor through the stripping:
//! the new position is the number of digits in the original prefix up to
//! the old position.

use crate::field::FieldState;

/// Removes every non-digit character from a string.
///
/// # Example
///
/// ```
/// use card_field::strip_non_digits;
///
/// assert_eq!(strip_non_digits("4242 4242 4242 4242"), "4242424242424242");
/// assert_eq!(strip_non_digits("12/34"), "1234");
/// assert_eq!(strip_non_digits("no digits"), "");
/// ```
pub fn strip_non_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Strips non-digits from a working state, remapping the cursor.
///
/// A position past the end of the value behaves as if it were at the end.
///
/// # Example
///
/// ```
/// use card_field::{extract_digits, FieldState};
///
/// let state = extract_digits(FieldState::new("4242 42", 6));
/// assert_eq!(state.value, "424242");
/// assert_eq!(state.position, 5);
/// ```
pub fn extract_digits(state: FieldState) -> FieldState {
    let position = state
        .value
        .chars()
        .take(state.position)
        .filter(char::is_ascii_digit)
        .count();
    FieldState {
        value: strip_non_digits(&state.value),
        position,
    }
}
