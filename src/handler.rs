//! The per-keystroke edit pipeline and the per-field handlers.
//!
//! [`revalidate`] is the composition point: classify the edit, derive the
//! digit-only state, run a validator over the digits, run a formatter to
//! shape the display text, and report the combined result. The card-number
//! and expiry handlers are instances of it; the CVC, cardholder-name and
//! required-text handlers are simpler shapes of their own.
//!
//! The subtle part is deletion. When the field shows "12/34" and the user
//! backspaces over the '/', the toolkit reports a value that lost only a
//! separator; re-deriving digits from the *new* value would put the slash
//! right back and the key would appear dead. So for backspace and delete
//! the digit state is reconstructed from the *prior* value instead, with
//! one digit spliced out at the logical cursor.

use crate::brand::CardBrand;
use crate::digits::{extract_digits, strip_non_digits};
use crate::edit::{classify, EditKind};
use crate::field::{char_len, FieldEditRequest, FieldEditResult, FieldState};
use crate::format::{format_card_number, format_expiry};
use crate::validate::{validate_card_number, validate_cvc, validate_expiry, Verdict};

/// The closed set of field kinds the form knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// The card number, space-grouped by brand.
    CardNumber,
    /// The expiry date, shaped as MM/YY.
    ExpireDate,
    /// The CVC, judged against the current card number's brand.
    Cvc,
    /// The cardholder name, uppercased.
    CardholderName,
    /// A required field that also reports completion, like the billing
    /// country picked from a list.
    Country,
    /// A plain required text field, like the billing zip code.
    Text,
}

/// Read-only access to the current card-number field value.
///
/// The CVC handler needs the card number to know the expected CVC length.
/// Passing a narrow accessor keeps that dependency explicit and one-way;
/// any `Fn() -> String` qualifies.
pub trait CardNumberSource {
    /// The card number as currently displayed (separators allowed).
    fn card_number(&self) -> String;
}

impl<F: Fn() -> String> CardNumberSource for F {
    fn card_number(&self) -> String {
        self()
    }
}

/// Runs one edit through the classify / extract / validate / format
/// pipeline.
///
/// This is the generic composition point behind [`card_number_handler`]
/// and [`expiry_handler`]; callers with their own validation rules can
/// plug in any validator and formatter pair.
pub fn revalidate<V, F>(request: &FieldEditRequest, validator: V, formatter: F) -> FieldEditResult
where
    V: Fn(&str) -> Verdict,
    F: Fn(FieldState) -> FieldState,
{
    let request = request.clamped();
    let raw = match classify(&request) {
        EditKind::Other => extract_digits(FieldState::new(
            request.now_value.clone(),
            request.now_position,
        )),
        kind => reconstruct_digits(&request, kind),
    };

    let verdict = validator(&raw.value);
    let shaped = formatter(raw);
    FieldEditResult {
        value: shaped.value,
        position: shaped.position,
        invalid: verdict.is_invalid(),
        finished: verdict.finished,
    }
}

/// Rebuilds the intended digit state after a backspace or delete.
///
/// Works from the digit form of the value *before* the edit, because the
/// removed character may have been a separator the formatter owns rather
/// than a digit the user owns.
///
/// Delete splices out the digit at the cursor and leaves the cursor put.
/// Backspace removes the digit just before a cursor past position one;
/// at position one or zero it instead drops the whole prefix before the
/// cursor and steps the cursor back.
fn reconstruct_digits(request: &FieldEditRequest, kind: EditKind) -> FieldState {
    let was = extract_digits(FieldState::new(
        request.was_value.clone(),
        request.was_position,
    ));
    let digits: Vec<char> = was.value.chars().collect();

    match kind {
        EditKind::Delete => {
            let mut remaining = digits;
            if was.position < remaining.len() {
                remaining.remove(was.position);
            }
            FieldState {
                value: remaining.into_iter().collect(),
                position: was.position,
            }
        }
        _ => {
            let value: String = if was.position > 1 {
                let mut remaining = digits;
                remaining.remove(was.position - 1);
                remaining.into_iter().collect()
            } else {
                digits[was.position.min(digits.len())..].iter().collect()
            };
            FieldState {
                value,
                position: was.position.saturating_sub(1),
            }
        }
    }
}

/// Handles one edit of the card-number field.
///
/// # Example
///
/// ```
/// use card_field::{card_number_handler, FieldEditRequest};
///
/// let result = card_number_handler(&FieldEditRequest {
///     was_value: "4242 4".into(),
///     was_position: 6,
///     was_anchor: 6,
///     now_value: "4242 42".into(),
///     now_position: 7,
/// });
/// assert_eq!(result.value, "4242 42");
/// assert_eq!(result.position, 7);
/// assert!(!result.invalid);
/// ```
pub fn card_number_handler(request: &FieldEditRequest) -> FieldEditResult {
    revalidate(request, validate_card_number, format_card_number)
}

/// Handles one edit of the expiry-date field.
pub fn expiry_handler(request: &FieldEditRequest) -> FieldEditResult {
    revalidate(request, validate_expiry, format_expiry)
}

/// Handles one edit of the CVC field.
///
/// No formatter and no deletion reconstruction: with no separators in the
/// value, the digits of the new state already are the intent. The current
/// card number (as displayed, separators fine) decides the expected
/// length.
pub fn cvc_handler(request: &FieldEditRequest, card_number: &str) -> FieldEditResult {
    let request = request.clamped();
    let raw = extract_digits(FieldState::new(
        request.now_value.clone(),
        request.now_position,
    ));
    let verdict = validate_cvc(card_number, &raw.value);
    FieldEditResult {
        value: raw.value,
        position: raw.position,
        invalid: verdict.is_invalid(),
        finished: verdict.finished,
    }
}

/// Handles one edit of the cardholder-name field: uppercase passthrough,
/// invalid while empty.
pub fn cardholder_name_handler(request: &FieldEditRequest) -> FieldEditResult {
    let request = request.clamped();
    let value = request.now_value.to_uppercase();
    let position = request.now_position.min(char_len(&value));
    FieldEditResult {
        invalid: value.is_empty(),
        finished: false,
        value,
        position,
    }
}

/// Handles one edit of a required text field.
///
/// `finish_when_filled` is set for fields whose mere presence completes
/// them (the billing country), so the form can advance focus; plain text
/// fields like the zip code never report finished.
pub fn required_text_handler(
    request: &FieldEditRequest,
    finish_when_filled: bool,
) -> FieldEditResult {
    let request = request.clamped();
    let empty = request.now_value.is_empty();
    FieldEditResult {
        value: request.now_value,
        position: request.now_position,
        invalid: empty,
        finished: finish_when_filled && !empty,
    }
}

/// A ready-made edit handler for one field kind.
///
/// This is the uniform `FieldEditRequest -> FieldEditResult` surface a UI
/// registers against each field's change events; construction picks the
/// implementation by kind.
pub enum FieldHandler {
    /// See [`card_number_handler`].
    CardNumber,
    /// See [`expiry_handler`].
    ExpireDate,
    /// See [`cvc_handler`]; owns its card-number accessor.
    Cvc(Box<dyn CardNumberSource>),
    /// See [`cardholder_name_handler`].
    CardholderName,
    /// Required and completing: see [`required_text_handler`].
    Country,
    /// Required only: see [`required_text_handler`].
    Text,
}

impl FieldHandler {
    /// Builds the handler for `kind`.
    ///
    /// `number` feeds the CVC handler its associated card number and is
    /// ignored by every other kind.
    pub fn new(kind: FieldKind, number: impl CardNumberSource + 'static) -> Self {
        match kind {
            FieldKind::CardNumber => Self::CardNumber,
            FieldKind::ExpireDate => Self::ExpireDate,
            FieldKind::Cvc => Self::Cvc(Box::new(number)),
            FieldKind::CardholderName => Self::CardholderName,
            FieldKind::Country => Self::Country,
            FieldKind::Text => Self::Text,
        }
    }

    /// The kind this handler was built for.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::CardNumber => FieldKind::CardNumber,
            Self::ExpireDate => FieldKind::ExpireDate,
            Self::Cvc(_) => FieldKind::Cvc,
            Self::CardholderName => FieldKind::CardholderName,
            Self::Country => FieldKind::Country,
            Self::Text => FieldKind::Text,
        }
    }

    /// Handles one edit.
    pub fn handle(&self, request: &FieldEditRequest) -> FieldEditResult {
        match self {
            Self::CardNumber => card_number_handler(request),
            Self::ExpireDate => expiry_handler(request),
            Self::Cvc(number) => cvc_handler(request, &number.card_number()),
            Self::CardholderName => cardholder_name_handler(request),
            Self::Country => required_text_handler(request, true),
            Self::Text => required_text_handler(request, false),
        }
    }
}

impl std::fmt::Debug for FieldHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FieldHandler").field(&self.kind()).finish()
    }
}

/// Detects the brand of a card-number value as displayed, separators
/// included. Handy for UI layers that show a brand icon next to the field.
pub fn card_number_brand(value: &str) -> Option<CardBrand> {
    CardBrand::detect(&strip_non_digits(value))
}
