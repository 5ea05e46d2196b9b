//! Cursor-aware re-insertion of formatting separators.
//!
//! Both formatters are pure: they take a digit-only working state and
//! return the text to display plus the adjusted cursor, never touching any
//! field object. Card numbers get a space between digit groups, expiry
//! dates get zero-padding plus a slash after the month.

use crate::brand::CardBrand;
use crate::field::FieldState;

/// Digit grouping for a (possibly partial) card number.
///
/// Brand-dependent: Amex groups 4-6-5, a complete 14-digit Diners number
/// groups 4-6-4, everything else groups by 4 with the remainder at the end.
///
/// # Example
///
/// ```
/// use card_field::group_lengths;
///
/// assert_eq!(group_lengths("4242424242424242"), vec![4, 4, 4, 4]);
/// assert_eq!(group_lengths("378282246310005"), vec![4, 6, 5]);
/// ```
pub fn group_lengths(digits: &str) -> Vec<usize> {
    let length = digits.chars().count();
    match CardBrand::detect(digits) {
        Some(CardBrand::Amex) => vec![4, 6, 5],
        Some(CardBrand::DinersClub) if length == 14 => vec![4, 6, 4],
        _ => {
            let mut groups = vec![4; length / 4];
            if length % 4 > 0 || groups.is_empty() {
                groups.push(4);
            }
            groups
        }
    }
}

/// Inserts group separators into a digit-only card number, keeping the
/// cursor visually in place.
///
/// Walks the cumulative group boundaries; at each boundary strictly before
/// the end of the string a single space goes in, and a cursor at or past
/// the insertion point moves right with it.
///
/// # Example
///
/// ```
/// use card_field::{format_card_number, FieldState};
///
/// let shaped = format_card_number(FieldState::new("424242", 5));
/// assert_eq!(shaped.value, "4242 42");
/// assert_eq!(shaped.position, 6);
/// ```
pub fn format_card_number(state: FieldState) -> FieldState {
    let mut value: Vec<char> = state.value.chars().collect();
    let mut position = state.position.min(value.len());

    let mut boundary = 0;
    for group in group_lengths(&state.value) {
        boundary += group;
        if boundary >= value.len() {
            break;
        }
        value.insert(boundary, ' ');
        if position >= boundary {
            position += 1;
        }
        boundary += 1;
    }

    FieldState {
        value: value.into_iter().collect(),
        position,
    }
}

/// Shapes a digit-only MMYY string for display, keeping the cursor in
/// place.
///
/// Lenient on purpose:
/// - a first digit above 1 is taken as a single-digit month and gets a
///   leading zero ("3" becomes "03"),
/// - an impossible two-digit month starting with 1 ("13".."19") is clamped
///   by truncating to the two month digits, with no slash,
/// - otherwise anything past one character is truncated to four digits and
///   a '/' goes in after the month.
///
/// Remaining invalidity (month "00", past dates) is the validator's call,
/// not this function's.
///
/// # Example
///
/// ```
/// use card_field::{format_expiry, FieldState};
///
/// let shaped = format_expiry(FieldState::new("3", 1));
/// assert_eq!(shaped.value, "03/");
/// assert_eq!(shaped.position, 3);
///
/// let shaped = format_expiry(FieldState::new("1234", 4));
/// assert_eq!(shaped.value, "12/34");
/// ```
pub fn format_expiry(state: FieldState) -> FieldState {
    let mut value: Vec<char> = state.value.chars().collect();
    let mut position = state.position.min(value.len());

    if value.is_empty() {
        return FieldState {
            value: state.value,
            position,
        };
    }
    if value.len() > 1 && value[0] == '1' && value[1] > '2' {
        value.truncate(2);
        return FieldState {
            value: value.into_iter().collect(),
            position: position.min(2),
        };
    }
    if value[0] > '1' {
        value.insert(0, '0');
        position += 1;
    }
    if value.len() > 1 {
        value.truncate(4);
        value.insert(2, '/');
        if position >= 2 {
            position += 1;
        }
    }

    let position = position.min(value.len());
    FieldState {
        value: value.into_iter().collect(),
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_number(digits: &str, position: usize) -> FieldState {
        format_card_number(FieldState::new(digits, position))
    }

    fn shape_expiry(digits: &str, position: usize) -> FieldState {
        format_expiry(FieldState::new(digits, position))
    }

    #[test]
    fn test_group_lengths_partial_number() {
        assert_eq!(group_lengths(""), vec![4]);
        assert_eq!(group_lengths("42"), vec![4]);
        assert_eq!(group_lengths("42424"), vec![4, 4]);
    }

    #[test]
    fn test_group_lengths_diners_full_vs_partial() {
        assert_eq!(group_lengths("30569309025904"), vec![4, 6, 4]);
        // Grouping snaps to 4-6-4 only once all 14 digits are present.
        assert_eq!(group_lengths("30569309"), vec![4, 4]);
    }

    #[test]
    fn test_format_full_visa() {
        let shaped = shape_number("4242424242424242", 16);
        assert_eq!(shaped.value, "4242 4242 4242 4242");
        assert_eq!(shaped.position, 19);
    }

    #[test]
    fn test_format_amex_grouping() {
        let shaped = shape_number("378282246310005", 15);
        assert_eq!(shaped.value, "3782 822463 10005");
        assert_eq!(shaped.position, 17);
    }

    #[test]
    fn test_no_trailing_separator() {
        // A boundary at the very end of the string inserts nothing.
        let shaped = shape_number("4242", 4);
        assert_eq!(shaped.value, "4242");
        assert_eq!(shaped.position, 4);
    }

    #[test]
    fn test_cursor_before_boundary_stays() {
        let shaped = shape_number("424242", 3);
        assert_eq!(shaped.value, "4242 42");
        assert_eq!(shaped.position, 3);
    }

    #[test]
    fn test_cursor_at_boundary_moves_past_separator() {
        let shaped = shape_number("424242", 4);
        assert_eq!(shaped.value, "4242 42");
        assert_eq!(shaped.position, 5);
    }

    #[test]
    fn test_format_empty_number() {
        let shaped = shape_number("", 0);
        assert_eq!(shaped.value, "");
        assert_eq!(shaped.position, 0);
    }

    #[test]
    fn test_expiry_empty_unchanged() {
        let shaped = shape_expiry("", 0);
        assert_eq!(shaped.value, "");
        assert_eq!(shaped.position, 0);
    }

    #[test]
    fn test_expiry_single_one_waits() {
        // "1" could still become 10, 11 or 12.
        let shaped = shape_expiry("1", 1);
        assert_eq!(shaped.value, "1");
        assert_eq!(shaped.position, 1);
    }

    #[test]
    fn test_expiry_zero_pads_high_first_digit() {
        let shaped = shape_expiry("3", 1);
        assert_eq!(shaped.value, "03/");
        assert_eq!(shaped.position, 3);
    }

    #[test]
    fn test_expiry_clamps_impossible_teen_month() {
        let shaped = shape_expiry("13", 2);
        assert_eq!(shaped.value, "13");
        assert_eq!(shaped.position, 2);
        // The clamp also discards anything typed after the month.
        let shaped = shape_expiry("134", 3);
        assert_eq!(shaped.value, "13");
        assert_eq!(shaped.position, 2);
    }

    #[test]
    fn test_expiry_slash_after_month() {
        let shaped = shape_expiry("12", 2);
        assert_eq!(shaped.value, "12/");
        assert_eq!(shaped.position, 3);

        let shaped = shape_expiry("123", 3);
        assert_eq!(shaped.value, "12/3");
        assert_eq!(shaped.position, 4);

        let shaped = shape_expiry("1234", 4);
        assert_eq!(shaped.value, "12/34");
        assert_eq!(shaped.position, 5);
    }

    #[test]
    fn test_expiry_truncates_to_four_digits() {
        let shaped = shape_expiry("12345", 5);
        assert_eq!(shaped.value, "12/34");
        assert_eq!(shaped.position, 5);
    }

    #[test]
    fn test_expiry_cursor_before_slash_stays() {
        let shaped = shape_expiry("1234", 1);
        assert_eq!(shaped.value, "12/34");
        assert_eq!(shaped.position, 1);
    }

    #[test]
    fn test_expiry_pad_then_slash_compound() {
        // "9" pads to "09", which then grows a slash; the cursor rides
        // through both insertions.
        let shaped = shape_expiry("94", 2);
        assert_eq!(shaped.value, "09/4");
        assert_eq!(shaped.position, 4);
    }
}
