//! Core data model for text-field edit events.
//!
//! A UI toolkit reports a text-field mutation as a before/after pair of
//! (value, cursor) snapshots; it does not say *what* the user did. The types
//! here carry those snapshots into the engine and carry the engine's verdict
//! back out.
//!
//! All cursor offsets are counted in characters, not bytes. Offsets coming
//! from a misbehaving toolkit may be past the end of their string; every
//! entry point clamps rather than panics, since this code runs on the hot
//! path of each keystroke.

/// One proposed text-field mutation, as reported by the toolkit.
///
/// `was_*` describes the field before the edit, `now_*` after it. The anchor
/// is the selection anchor at the time of the edit; when nothing was
/// selected it equals `was_position`.
///
/// # Example
///
/// ```
/// use card_field::FieldEditRequest;
///
/// // The user typed '2' at the end of "4242 4".
/// let request = FieldEditRequest {
///     was_value: "4242 4".into(),
///     was_position: 6,
///     was_anchor: 6,
///     now_value: "4242 42".into(),
///     now_position: 7,
/// };
/// assert_eq!(request.clamped(), request);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldEditRequest {
    /// The field value before the edit.
    pub was_value: String,
    /// The cursor position before the edit (char offset).
    pub was_position: usize,
    /// The selection anchor before the edit (char offset).
    pub was_anchor: usize,
    /// The field value after the edit.
    pub now_value: String,
    /// The cursor position after the edit (char offset).
    pub now_position: usize,
}

impl FieldEditRequest {
    /// Returns a copy with every offset clamped into its string.
    pub fn clamped(&self) -> Self {
        let was_len = char_len(&self.was_value);
        let now_len = char_len(&self.now_value);
        Self {
            was_value: self.was_value.clone(),
            was_position: self.was_position.min(was_len),
            was_anchor: self.was_anchor.min(was_len),
            now_value: self.now_value.clone(),
            now_position: self.now_position.min(now_len),
        }
    }
}

/// The engine's verdict on one edit: the text and cursor to display, plus
/// the structural status of the value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldEditResult {
    /// The value the field should now display.
    pub value: String,
    /// The cursor position to set (char offset into `value`).
    pub position: usize,
    /// True if the value is structurally invalid and should be highlighted.
    pub invalid: bool,
    /// True if the value is complete and no further input is expected.
    pub finished: bool,
}

/// A working (value, cursor) pair.
///
/// Created fresh inside a single edit-handling call and discarded with it;
/// the extractor and formatters consume and produce these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    /// The working text, digits-only or formatted depending on the stage.
    pub value: String,
    /// The cursor position (char offset into `value`).
    pub position: usize,
}

impl FieldState {
    /// Creates a state with the position clamped into the value.
    pub fn new(value: impl Into<String>, position: usize) -> Self {
        let value = value.into();
        let position = position.min(char_len(&value));
        Self { value, position }
    }
}

/// Character count of a string (cursor offsets are char offsets).
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
