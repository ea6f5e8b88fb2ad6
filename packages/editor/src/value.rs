use serde::{Deserialize, Serialize};

use fairway_model::{Picture, PilotPlace};

/// Payload of one edit action
///
/// A closed union of everything the form can hand the engine: plain
/// text, the add/remove toggle flag, selection lists and the two
/// structured bulk replacements (pilot places, pictures).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    TextList(Vec<String>),
    NumberList(Vec<i64>),
    PilotPlaces(Vec<PilotPlace>),
    Pictures(Vec<Picture>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::TextList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_number_list(&self) -> Option<&[i64]> {
        match self {
            FieldValue::NumberList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_pilot_places(&self) -> Option<&[PilotPlace]> {
        match self {
            FieldValue::PilotPlaces(places) => Some(places),
            _ => None,
        }
    }

    pub fn as_pictures(&self) -> Option<&[Picture]> {
        match self {
            FieldValue::Pictures(pictures) => Some(pictures),
            _ => None,
        }
    }

    /// Truthiness drives the append/remove toggle on collection actions
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(value) => !value.is_empty(),
            FieldValue::Flag(flag) => *flag,
            FieldValue::TextList(values) => !values.is_empty(),
            FieldValue::NumberList(values) => !values.is_empty(),
            FieldValue::PilotPlaces(places) => !places.is_empty(),
            FieldValue::Pictures(pictures) => !pictures.is_empty(),
        }
    }
}
