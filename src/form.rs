//! The card-entry form aggregate.
//!
//! [`CardForm`] owns the current (value, cursor) state of every field,
//! routes each toolkit edit event to the matching handler, and assembles
//! the final [`UncheckedCardDetails`] for submission. It is the widgetless
//! counterpart of a card-entry panel: layout, focus traversal and the
//! submit button stay with the UI; the data and per-keystroke behavior
//! live here.

use crate::field::{FieldEditRequest, FieldEditResult};
use crate::handler::{
    card_number_handler, cardholder_name_handler, cvc_handler, expiry_handler,
    required_text_handler,
};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The fields a card-entry form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    /// The card number.
    Number,
    /// The CVC / CVV security code.
    Cvc,
    /// The expiry date.
    ExpireDate,
    /// The cardholder name.
    Name,
    /// The billing country.
    AddressCountry,
    /// The billing zip / postal code.
    AddressZip,
}

/// Which optional fields the payment provider wants collected.
///
/// The card number, expiry date and CVC are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFormConfig {
    /// Collect the cardholder name.
    pub need_cardholder_name: bool,
    /// Collect the billing country.
    pub need_country: bool,
    /// Collect the billing zip code.
    pub need_zip: bool,
    /// Pre-filled country value, when the provider supplies one.
    pub default_country: String,
}

/// Per-field slot: current display state plus the last verdict flags.
#[derive(Debug, Clone, Default)]
struct FieldSlot {
    value: String,
    position: usize,
    invalid: bool,
    finished: bool,
}

impl FieldSlot {
    fn apply(&mut self, result: &FieldEditResult) {
        self.value = result.value.clone();
        self.position = result.position;
        self.invalid = result.invalid;
        self.finished = result.finished;
    }
}

/// The assembled, *unchecked* card details a form hands to the payment
/// API client.
///
/// Unchecked means structurally plausible at best: the engine never talks
/// to a payment network. The number and CVC are wiped from memory on drop
/// and masked in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct UncheckedCardDetails {
    /// The card number, digits only.
    pub number: String,
    /// The CVC, digits only.
    pub cvc: String,
    /// Expiry month 1-12, or 0 when the field could not be parsed.
    pub expire_month: u32,
    /// Four-digit expiry year, or 2000 when the field held no year.
    pub expire_year: u32,
    /// The cardholder name, uppercased; empty when not collected.
    pub cardholder_name: String,
    /// The billing country; empty when not collected.
    pub address_country: String,
    /// The billing zip code; empty when not collected.
    pub address_zip: String,
}

impl fmt::Debug for UncheckedCardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UncheckedCardDetails")
            .field("number", &mask_tail(&self.number))
            .field("cvc", &"***")
            .field("expire_month", &self.expire_month)
            .field("expire_year", &self.expire_year)
            .field("cardholder_name", &self.cardholder_name)
            .field("address_country", &self.address_country)
            .field("address_zip", &self.address_zip)
            .finish()
    }
}

fn mask_tail(number: &str) -> String {
    let digits: Vec<char> = number.chars().collect();
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }
    let tail: String = digits[digits.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(digits.len() - 4), tail)
}

/// A widgetless card-entry form.
///
/// Feed it one [`FieldEditRequest`] per user edit via [`CardForm::edit`];
/// apply the returned value and cursor to the widget; call
/// [`CardForm::collect`] when the user submits.
///
/// # Example
///
/// ```
/// use card_field::{CardField, CardForm, CardFormConfig, FieldEditRequest};
///
/// let mut form = CardForm::new(CardFormConfig::default());
/// let result = form.edit(CardField::Number, &FieldEditRequest {
///     was_value: String::new(),
///     was_position: 0,
///     was_anchor: 0,
///     now_value: "4242424242424242".into(),
///     now_position: 16,
/// });
/// assert_eq!(result.value, "4242 4242 4242 4242");
/// assert!(result.finished);
/// assert_eq!(form.collect().number, "4242424242424242");
/// ```
#[derive(Debug)]
pub struct CardForm {
    config: CardFormConfig,
    number: FieldSlot,
    cvc: FieldSlot,
    expire: FieldSlot,
    name: FieldSlot,
    country: FieldSlot,
    zip: FieldSlot,
}

impl CardForm {
    /// Creates an empty form; the country slot starts at the configured
    /// default.
    pub fn new(config: CardFormConfig) -> Self {
        let country = FieldSlot {
            value: config.default_country.clone(),
            position: config.default_country.chars().count(),
            invalid: false,
            finished: !config.default_country.is_empty(),
        };
        Self {
            config,
            number: FieldSlot::default(),
            cvc: FieldSlot::default(),
            expire: FieldSlot::default(),
            name: FieldSlot::default(),
            country,
            zip: FieldSlot::default(),
        }
    }

    /// Routes one edit event to the field's handler and stores the
    /// outcome as that field's new state.
    pub fn edit(&mut self, field: CardField, request: &FieldEditRequest) -> FieldEditResult {
        let result = match field {
            CardField::Number => card_number_handler(request),
            CardField::Cvc => cvc_handler(request, &self.number.value),
            CardField::ExpireDate => expiry_handler(request),
            CardField::Name => cardholder_name_handler(request),
            CardField::AddressCountry => required_text_handler(request, true),
            CardField::AddressZip => required_text_handler(request, false),
        };
        self.slot_mut(field).apply(&result);
        result
    }

    /// Replaces a field's value wholesale (programmatic set, e.g. a
    /// country picked from a list), running it through the same handler
    /// as a paste would.
    pub fn set_value(&mut self, field: CardField, value: &str) -> FieldEditResult {
        let slot = self.slot(field);
        let request = FieldEditRequest {
            was_value: slot.value.clone(),
            was_position: slot.position,
            was_anchor: slot.position,
            now_value: value.to_string(),
            now_position: value.chars().count(),
        };
        self.edit(field, &request)
    }

    /// The value a field currently displays.
    pub fn value(&self, field: CardField) -> &str {
        &self.slot(field).value
    }

    /// The cursor position a field currently holds.
    pub fn position(&self, field: CardField) -> usize {
        self.slot(field).position
    }

    /// Whether the field's last verdict flagged it invalid.
    pub fn is_invalid(&self, field: CardField) -> bool {
        self.slot(field).invalid
    }

    /// Whether the field's last verdict reported completion.
    pub fn is_finished(&self, field: CardField) -> bool {
        self.slot(field).finished
    }

    /// The configuration the form was built with.
    pub fn config(&self) -> &CardFormConfig {
        &self.config
    }

    /// The first field that blocks submission: empty where required, or
    /// flagged invalid. `None` means the form is ready to collect.
    pub fn first_incomplete_field(&self) -> Option<CardField> {
        let mut checks: Vec<(CardField, &FieldSlot)> = vec![
            (CardField::Number, &self.number),
            (CardField::ExpireDate, &self.expire),
            (CardField::Cvc, &self.cvc),
        ];
        if self.config.need_cardholder_name {
            checks.push((CardField::Name, &self.name));
        }
        if self.config.need_country {
            checks.push((CardField::AddressCountry, &self.country));
        }
        if self.config.need_zip {
            checks.push((CardField::AddressZip, &self.zip));
        }
        checks
            .into_iter()
            .find(|(_, slot)| slot.invalid || slot.value.is_empty())
            .map(|(field, _)| field)
    }

    /// Assembles the unchecked card details for submission.
    ///
    /// No final gate is applied here; the caller decides whether to block
    /// on [`CardForm::first_incomplete_field`] first.
    pub fn collect(&self) -> UncheckedCardDetails {
        UncheckedCardDetails {
            number: crate::strip_non_digits(&self.number.value),
            cvc: self.cvc.value.clone(),
            expire_month: extract_month(&self.expire.value),
            expire_year: extract_year(&self.expire.value),
            cardholder_name: self.name.value.clone(),
            address_country: self.country.value.clone(),
            address_zip: self.zip.value.clone(),
        }
    }

    fn slot(&self, field: CardField) -> &FieldSlot {
        match field {
            CardField::Number => &self.number,
            CardField::Cvc => &self.cvc,
            CardField::ExpireDate => &self.expire,
            CardField::Name => &self.name,
            CardField::AddressCountry => &self.country,
            CardField::AddressZip => &self.zip,
        }
    }

    fn slot_mut(&mut self, field: CardField) -> &mut FieldSlot {
        match field {
            CardField::Number => &mut self.number,
            CardField::Cvc => &mut self.cvc,
            CardField::ExpireDate => &mut self.expire,
            CardField::Name => &mut self.name,
            CardField::AddressCountry => &mut self.country,
            CardField::AddressZip => &mut self.zip,
        }
    }
}

/// Month component of a displayed "MM/YY" value; 0 when unparsable.
fn extract_month(value: &str) -> u32 {
    value
        .split('/')
        .next()
        .and_then(|m| m.parse().ok())
        .unwrap_or(0)
}

/// Year component of a displayed "MM/YY" value, as a four-digit year.
/// A missing or unparsable year yields 2000, mirroring the lenient
/// two-digit-year expansion.
fn extract_year(value: &str) -> u32 {
    2000 + value
        .split('/')
        .nth(1)
        .and_then(|y| y.parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> CardFormConfig {
        CardFormConfig {
            need_cardholder_name: true,
            need_country: true,
            need_zip: true,
            default_country: String::new(),
        }
    }

    #[test]
    fn test_edit_updates_slot() {
        let mut form = CardForm::new(CardFormConfig::default());
        let result = form.set_value(CardField::Number, "42424242");
        assert_eq!(result.value, "4242 4242");
        assert_eq!(form.value(CardField::Number), "4242 4242");
        assert_eq!(form.position(CardField::Number), 9);
    }

    #[test]
    fn test_cvc_reads_current_number() {
        let mut form = CardForm::new(CardFormConfig::default());
        form.set_value(CardField::Number, "378282246310005");
        // Amex wants 4 digits, so 3 are incomplete rather than finished.
        let result = form.set_value(CardField::Cvc, "123");
        assert!(!result.finished);
        let result = form.set_value(CardField::Cvc, "1234");
        assert!(result.finished);
    }

    #[test]
    fn test_collect_strips_number_formatting() {
        let mut form = CardForm::new(CardFormConfig::default());
        form.set_value(CardField::Number, "4242424242424242");
        form.set_value(CardField::ExpireDate, "1240");
        form.set_value(CardField::Cvc, "123");
        let details = form.collect();
        assert_eq!(details.number, "4242424242424242");
        assert_eq!(details.cvc, "123");
        assert_eq!(details.expire_month, 12);
        assert_eq!(details.expire_year, 2040);
    }

    #[test]
    fn test_collect_empty_expiry_defaults() {
        let form = CardForm::new(CardFormConfig::default());
        let details = form.collect();
        assert_eq!(details.expire_month, 0);
        assert_eq!(details.expire_year, 2000);
    }

    #[test]
    fn test_collect_name_uppercased() {
        let mut form = CardForm::new(full_config());
        form.set_value(CardField::Name, "john smith");
        assert_eq!(form.collect().cardholder_name, "JOHN SMITH");
    }

    #[test]
    fn test_default_country_prefill() {
        let config = CardFormConfig {
            need_country: true,
            default_country: "DE".into(),
            ..CardFormConfig::default()
        };
        let form = CardForm::new(config);
        assert_eq!(form.value(CardField::AddressCountry), "DE");
        assert!(form.is_finished(CardField::AddressCountry));
    }

    #[test]
    fn test_first_incomplete_field_order() {
        let mut form = CardForm::new(full_config());
        assert_eq!(form.first_incomplete_field(), Some(CardField::Number));
        form.set_value(CardField::Number, "4242424242424242");
        assert_eq!(form.first_incomplete_field(), Some(CardField::ExpireDate));
        form.set_value(CardField::ExpireDate, "1240");
        form.set_value(CardField::Cvc, "123");
        assert_eq!(form.first_incomplete_field(), Some(CardField::Name));
        form.set_value(CardField::Name, "J SMITH");
        form.set_value(CardField::AddressCountry, "DE");
        form.set_value(CardField::AddressZip, "10115");
        assert_eq!(form.first_incomplete_field(), None);
    }

    #[test]
    fn test_invalid_field_blocks_submission() {
        let mut form = CardForm::new(CardFormConfig::default());
        form.set_value(CardField::Number, "4242424242424241");
        assert!(form.is_invalid(CardField::Number));
        assert_eq!(form.first_incomplete_field(), Some(CardField::Number));
    }

    #[test]
    fn test_details_debug_masks_secrets() {
        let mut form = CardForm::new(CardFormConfig::default());
        form.set_value(CardField::Number, "4242424242424242");
        form.set_value(CardField::Cvc, "123");
        let debug = format!("{:?}", form.collect());
        assert!(!debug.contains("4242424242424242"));
        assert!(debug.contains("4242"));
        assert!(!debug.contains("123"));
    }

    #[test]
    fn test_mask_tail() {
        assert_eq!(mask_tail("4242424242424242"), "************4242");
        assert_eq!(mask_tail("42"), "**");
        assert_eq!(mask_tail(""), "");
    }
}
