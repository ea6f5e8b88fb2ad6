use fairway_model::LocalizedText;

use crate::messages::{MessageKey, Translate};

/// Required check for a plain scalar field
pub fn required_scalar_message(value: &str, translator: &dyn Translate) -> String {
    if value.trim().is_empty() {
        translator.translate(MessageKey::Required)
    } else {
        String::new()
    }
}

/// Required check for a selection list
pub fn required_list_message<T>(values: &[T], translator: &dyn Translate) -> String {
    if values.is_empty() {
        translator.translate(MessageKey::Required)
    } else {
        String::new()
    }
}

/// Flag message for a localized cell
///
/// Flags the cell when SOME trimmed variant is non-empty and clears it
/// when all variants are empty. The submit-time validator owns the
/// empty-cell case; changing this here breaks callers that assert on
/// the exact message sequence.
pub fn localized_flag_message(text: &LocalizedText, translator: &dyn Translate) -> String {
    if text.has_content() {
        translator.translate(MessageKey::Required)
    } else {
        String::new()
    }
}

/// Primary id: required, and unique against the ids already in use
pub fn primary_id_message(
    value: &str,
    reserved_ids: &[String],
    translator: &dyn Translate,
) -> String {
    if value.trim().is_empty() {
        translator.translate(MessageKey::Required)
    } else if reserved_ids.iter().any(|id| id == value) {
        translator.translate(MessageKey::DuplicateId)
    } else {
        String::new()
    }
}
