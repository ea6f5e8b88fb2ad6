use serde::{Deserialize, Serialize};

/// Message catalogue key for a validation rule outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageKey {
    Required,
    Invalid,
    EndDateBeforeStartDate,
    DuplicateLocation,
    DuplicateId,
}

impl MessageKey {
    /// Catalogue key as the surrounding product addresses it
    pub fn as_key(&self) -> &'static str {
        match self {
            MessageKey::Required => "required",
            MessageKey::Invalid => "invalid",
            MessageKey::EndDateBeforeStartDate => "endDateError",
            MessageKey::DuplicateLocation => "duplicateLocation",
            MessageKey::DuplicateId => "duplicateId",
        }
    }
}

/// Localization capability consumed by the validation rules
pub trait Translate {
    fn translate(&self, key: MessageKey) -> String;
}

/// Fallback translator that surfaces the bare catalogue key, used when
/// no localization catalog is wired in
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translate for KeyTranslator {
    fn translate(&self, key: MessageKey) -> String {
        key.as_key().to_string()
    }
}
