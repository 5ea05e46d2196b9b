//! # card_field
//!
//! Incremental formatting and validation engine for payment-card entry
//! fields.
//!
//! A desktop toolkit reports a text-field edit as nothing more than a new
//! value and cursor. This crate turns that raw event into what a card form
//! actually needs: it recognizes backspaces and deletes, strips and
//! re-inserts formatting separators (spaces in card numbers, the slash in
//! expiry dates), keeps the cursor where the user expects it, and reports
//! whether the value is structurally invalid or complete.
//!
//! ## Quick start
//!
//! ```rust
//! use card_field::{card_number_handler, FieldEditRequest};
//!
//! // The user pressed '2' at the end of "4242 4".
//! let result = card_number_handler(&FieldEditRequest {
//!     was_value: "4242 4".into(),
//!     was_position: 6,
//!     was_anchor: 6,
//!     now_value: "4242 42".into(),
//!     now_position: 7,
//! });
//! assert_eq!(result.value, "4242 42");
//! assert_eq!(result.position, 7);
//! assert!(!result.invalid); // partial numbers are incomplete, not wrong
//! ```
//!
//! ## Deleting through formatting
//!
//! Backspacing over a separator must still cost a digit, or reformatting
//! would put the separator straight back and the key would appear dead:
//!
//! ```rust
//! use card_field::{expiry_handler, FieldEditRequest};
//!
//! // "12/34", cursor right after the slash, backspace pressed.
//! let result = expiry_handler(&FieldEditRequest {
//!     was_value: "12/34".into(),
//!     was_position: 3,
//!     was_anchor: 3,
//!     now_value: "1234".into(),
//!     now_position: 2,
//! });
//! // The digit before the slash went with it.
//! assert_eq!(result.value, "13");
//! assert_eq!(result.position, 1);
//! ```
//!
//! ## A whole form
//!
//! ```rust
//! use card_field::{CardField, CardForm, CardFormConfig};
//!
//! let mut form = CardForm::new(CardFormConfig::default());
//! form.set_value(CardField::Number, "4242424242424242");
//! form.set_value(CardField::ExpireDate, "1240");
//! form.set_value(CardField::Cvc, "123");
//!
//! assert!(form.first_incomplete_field().is_none());
//! let details = form.collect();
//! assert_eq!(details.number, "4242424242424242");
//! assert_eq!(details.expire_month, 12);
//! assert_eq!(details.expire_year, 2040);
//! ```
//!
//! ## Design
//!
//! Every handler is a total, synchronous function of its inputs: no
//! `Result` on the keystroke path, no I/O, no shared state beyond the CVC
//! handler's read-only view of the card number. Malformed cursor offsets
//! are clamped, never rejected. "Errors" are the `invalid` flag on
//! [`FieldEditResult`], which the UI renders however it likes.
//!
//! ## Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serde derives on [`FieldEditRequest`] / [`FieldEditResult`] |
//!
//! ## Security
//!
//! Collected card details ([`UncheckedCardDetails`]) are zeroed on drop,
//! and `Debug` output masks the number and CVC.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod digits;
pub mod edit;
pub mod field;
pub mod form;
pub mod format;
pub mod handler;
pub mod luhn;
pub mod validate;

// Re-export the working set at the crate root
pub use brand::{CardBrand, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use digits::{extract_digits, strip_non_digits};
pub use edit::{classify, EditKind};
pub use field::{FieldEditRequest, FieldEditResult, FieldState};
pub use form::{CardField, CardForm, CardFormConfig, UncheckedCardDetails};
pub use format::{format_card_number, format_expiry, group_lengths};
pub use handler::{
    card_number_brand, card_number_handler, cardholder_name_handler, cvc_handler, expiry_handler,
    required_text_handler, revalidate, CardNumberSource, FieldHandler, FieldKind,
};
pub use validate::{
    validate_card_number, validate_cvc, validate_expiry, ValidationState, Verdict,
};
