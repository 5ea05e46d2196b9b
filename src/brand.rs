//! Card brand detection from BIN/IIN prefixes.
//!
//! Only the distinctions that affect input handling are modeled: the digit
//! grouping used when formatting, the lengths at which a number can be
//! complete, and the expected CVC length. Detection matches on the leading
//! bytes of a digit string, so it works on partial input from the very
//! first keystroke.

use std::fmt;

/// Card networks the input engine distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// Discover - prefix 6011, 644-649, 65
    Discover,
    /// Diners Club - prefix 36, 38, 300-305, 309
    DinersClub,
    /// JCB - prefix 3528-3589
    Jcb,
    /// UnionPay - prefix 62
    UnionPay,
    /// Maestro - prefix 50, 56-69 (minus ranges claimed above)
    Maestro,
    /// Mir - prefix 2200-2204
    Mir,
}

impl CardBrand {
    /// Detects the brand from the leading digits of a digit-only string.
    ///
    /// Returns `None` while the prefix is too short to decide or when no
    /// known network matches.
    ///
    /// # Example
    ///
    /// ```
    /// use card_field::CardBrand;
    ///
    /// assert_eq!(CardBrand::detect("4242"), Some(CardBrand::Visa));
    /// assert_eq!(CardBrand::detect("3782"), Some(CardBrand::Amex));
    /// assert_eq!(CardBrand::detect("1"), None);
    /// ```
    pub fn detect(digits: &str) -> Option<Self> {
        // Order matters for overlapping ranges; more specific prefixes
        // must come before the ranges that contain them.
        match digits.as_bytes() {
            // Mir 2200-2204, carved out of Mastercard's 2-series
            [b'2', b'2', b'0', b'0'..=b'4', ..] => Some(Self::Mir),

            // Mastercard 51-55 and 2221-2720
            [b'5', b'1'..=b'5', ..] => Some(Self::Mastercard),
            [b'2', b'2', b'2', b'1'..=b'9', ..] => Some(Self::Mastercard),
            [b'2', b'2', b'3'..=b'9', _, ..] => Some(Self::Mastercard),
            [b'2', b'3'..=b'6', _, _, ..] => Some(Self::Mastercard),
            [b'2', b'7', b'0'..=b'1', _, ..] => Some(Self::Mastercard),
            [b'2', b'7', b'2', b'0', ..] => Some(Self::Mastercard),

            [b'3', b'4', ..] | [b'3', b'7', ..] => Some(Self::Amex),

            [b'3', b'6', ..] | [b'3', b'8', ..] => Some(Self::DinersClub),
            [b'3', b'0', b'0'..=b'5', ..] => Some(Self::DinersClub),
            [b'3', b'0', b'9', ..] => Some(Self::DinersClub),

            [b'3', b'5', b'2', b'8'..=b'9', ..] => Some(Self::Jcb),
            [b'3', b'5', b'3'..=b'8', _, ..] => Some(Self::Jcb),

            [b'4', ..] => Some(Self::Visa),

            [b'5', b'0', ..] => Some(Self::Maestro),

            // Discover 6011, 644-649, 65 before the Maestro 6x fallback
            [b'6', b'0', b'1', b'1', ..] => Some(Self::Discover),
            [b'6', b'4', b'4'..=b'9', ..] => Some(Self::Discover),
            [b'6', b'5', ..] => Some(Self::Discover),

            [b'6', b'2', ..] => Some(Self::UnionPay),

            [b'5', b'6'..=b'9', ..] => Some(Self::Maestro),
            [b'6', ..] => Some(Self::Maestro),

            _ => None,
        }
    }

    /// The digit counts at which a number of this brand is complete.
    ///
    /// Sorted ascending; the last entry is the brand's maximum length.
    pub const fn valid_lengths(&self) -> &'static [usize] {
        match self {
            Self::Visa => &[13, 16],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16],
            Self::DinersClub => &[14, 16],
            Self::Jcb => &[16],
            Self::UnionPay => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
            Self::Mir => &[16, 17, 18, 19],
        }
    }

    /// True if `length` digits can be a complete number for this brand.
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// The shortest complete length for this brand.
    pub const fn min_length(&self) -> usize {
        self.valid_lengths()[0]
    }

    /// The longest complete length for this brand.
    pub const fn max_length(&self) -> usize {
        let valid = self.valid_lengths();
        valid[valid.len() - 1]
    }

    /// The expected CVC length: 4 for Amex, 3 for everything else.
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Human-readable network name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Maestro => "Maestro",
            Self::Mir => "Mir",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fewest digits any recognized card number can have.
pub const MIN_CARD_DIGITS: usize = 12;

/// Most digits any recognized card number can have.
pub const MAX_CARD_DIGITS: usize = 19;
