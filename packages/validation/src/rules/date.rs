use chrono::NaiveDate;

use crate::messages::{MessageKey, Translate};

/// Parse a user-entered notification date
///
/// Accepts the dotted form (`1.2.2002`) and the compact 8-digit form
/// (`01022002`), both day first.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%d.%m.%Y")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d%m%Y"))
        .ok()
}

/// Start date: required when empty, invalid when unparsable
pub fn start_date_message(start: &str, translator: &dyn Translate) -> String {
    if start.trim().is_empty() {
        translator.translate(MessageKey::Required)
    } else if parse_entry_date(start).is_none() {
        translator.translate(MessageKey::Invalid)
    } else {
        String::new()
    }
}

/// End date: validated only when present
///
/// An unparsable end date reports invalid before any ordering check;
/// the ordering check runs only when both dates parse.
pub fn end_date_message(start: &str, end: &str, translator: &dyn Translate) -> String {
    if end.trim().is_empty() {
        return String::new();
    }
    let Some(end_date) = parse_entry_date(end) else {
        return translator.translate(MessageKey::Invalid);
    };
    match parse_entry_date(start) {
        Some(start_date) if end_date < start_date => {
            translator.translate(MessageKey::EndDateBeforeStartDate)
        }
        _ => String::new(),
    }
}
