//! Edit classification.
//!
//! A toolkit edit event carries only the final value and cursor, not the
//! operation that produced them. Reformatting needs to know whether a
//! single character was removed (and on which side of the cursor), because
//! that character may have been a formatting separator rather than a digit:
//! the semantic intent is still "remove one digit", and re-inserting the
//! separator right back would make deletion impossible.
//!
//! `classify` pattern-matches the two deletion shapes; every other edit
//! (typed characters, pastes, selection replacements) is [`EditKind::Other`].

use crate::field::FieldEditRequest;

/// The recognized shapes of a text-field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// One character removed immediately before the cursor, no selection.
    Backspace,
    /// One character removed immediately after the cursor, no selection.
    Delete,
    /// Any other edit: typed character, paste, multi-char or selection
    /// replacement.
    Other,
}

/// Classifies an edit from its before/after snapshots.
///
/// # Example
///
/// ```
/// use card_field::{classify, EditKind, FieldEditRequest};
///
/// // "4242 " with the cursor at the end, backspace pressed.
/// let request = FieldEditRequest {
///     was_value: "4242 ".into(),
///     was_position: 5,
///     was_anchor: 5,
///     now_value: "4242".into(),
///     now_position: 4,
/// };
/// assert_eq!(classify(&request), EditKind::Backspace);
/// ```
pub fn classify(request: &FieldEditRequest) -> EditKind {
    if is_backspace(request) {
        EditKind::Backspace
    } else if is_delete(request) {
        EditKind::Delete
    } else {
        EditKind::Other
    }
}

fn is_backspace(request: &FieldEditRequest) -> bool {
    request.was_anchor == request.was_position
        && request.was_position == request.now_position + 1
        && chars_eq(
            prefix(&request.was_value, request.was_position - 1),
            prefix(&request.now_value, request.now_position),
        )
        && chars_eq(
            suffix(&request.was_value, request.was_position),
            suffix(&request.now_value, request.now_position),
        )
}

fn is_delete(request: &FieldEditRequest) -> bool {
    request.was_anchor == request.was_position
        && request.was_position == request.now_position
        && chars_eq(
            prefix(&request.was_value, request.was_position),
            prefix(&request.now_value, request.now_position),
        )
        && chars_eq(
            suffix(&request.was_value, request.was_position + 1),
            suffix(&request.now_value, request.now_position),
        )
}

fn prefix(s: &str, n: usize) -> impl Iterator<Item = char> + '_ {
    s.chars().take(n)
}

fn suffix(s: &str, n: usize) -> impl Iterator<Item = char> + '_ {
    s.chars().skip(n)
}

fn chars_eq(a: impl Iterator<Item = char>, b: impl Iterator<Item = char>) -> bool {
    a.eq(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        was_value: &str,
        was_position: usize,
        was_anchor: usize,
        now_value: &str,
        now_position: usize,
    ) -> FieldEditRequest {
        FieldEditRequest {
            was_value: was_value.into(),
            was_position,
            was_anchor,
            now_value: now_value.into(),
            now_position,
        }
    }

    #[test]
    fn test_backspace_at_end() {
        let r = request("1234", 4, 4, "123", 3);
        assert_eq!(classify(&r), EditKind::Backspace);
    }

    #[test]
    fn test_backspace_in_middle() {
        let r = request("1234", 2, 2, "134", 1);
        assert_eq!(classify(&r), EditKind::Backspace);
    }

    #[test]
    fn test_backspace_of_separator() {
        // Removing the space in "4242 4" is still a backspace shape.
        let r = request("4242 4", 5, 5, "42424", 4);
        assert_eq!(classify(&r), EditKind::Backspace);
    }

    #[test]
    fn test_delete_at_start() {
        let r = request("1234", 0, 0, "234", 0);
        assert_eq!(classify(&r), EditKind::Delete);
    }

    #[test]
    fn test_delete_in_middle() {
        let r = request("1234", 2, 2, "124", 2);
        assert_eq!(classify(&r), EditKind::Delete);
    }

    #[test]
    fn test_typed_char_is_other() {
        let r = request("123", 3, 3, "1234", 4);
        assert_eq!(classify(&r), EditKind::Other);
    }

    #[test]
    fn test_paste_is_other() {
        let r = request("12", 2, 2, "12345678", 8);
        assert_eq!(classify(&r), EditKind::Other);
    }

    #[test]
    fn test_selection_replace_is_other() {
        // Two characters selected (anchor != position), replaced by one.
        let r = request("1234", 3, 1, "154", 2);
        assert_eq!(classify(&r), EditKind::Other);
    }

    #[test]
    fn test_selection_backspace_is_other() {
        // Backspace over a selection removes more than one character.
        let r = request("1234", 3, 1, "14", 1);
        assert_eq!(classify(&r), EditKind::Other);
    }

    #[test]
    fn test_suffix_mismatch_is_other() {
        // Cursor arithmetic matches a backspace but the tail changed too.
        let r = request("1234", 4, 4, "129", 3);
        assert_eq!(classify(&r), EditKind::Other);
    }

    #[test]
    fn test_no_change_is_other() {
        let r = request("1234", 2, 2, "1234", 2);
        assert_eq!(classify(&r), EditKind::Other);
    }
}
