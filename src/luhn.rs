//! Luhn (mod-10) checksum over a digit string.
//!
//! Used to decide whether a card number at a complete length is plausible
//! or still a typo. The engine holds numbers as digit-only strings, so the
//! check runs directly on `&str`.

/// Doubled-digit lookup: double the value, subtract 9 if the result has
/// two digits. Indexed by the original digit.
const DOUBLE_TABLE: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks the Luhn checksum of a digit-only string.
///
/// Returns `false` for an empty string. Non-digit characters are ignored,
/// matching the extraction the rest of the engine applies first.
///
/// # Example
///
/// ```
/// use card_field::luhn;
///
/// assert!(luhn::is_valid("4242424242424242"));
/// assert!(!luhn::is_valid("4242424242424241"));
/// ```
pub fn is_valid(digits: &str) -> bool {
    let mut sum = 0u32;
    let mut count = 0usize;

    // Walk right to left; every second digit from the check digit doubles.
    for b in digits.bytes().rev() {
        if !b.is_ascii_digit() {
            continue;
        }
        let digit = (b - b'0') as u32;
        sum += if count % 2 == 1 {
            DOUBLE_TABLE[digit as usize]
        } else {
            digit
        };
        count += 1;
    }

    count > 0 && sum % 10 == 0
}
