use serde::{Deserialize, Serialize};

/// Language tag for localized content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Fi,
    Sv,
    En,
}

impl Lang {
    /// All supported languages, in catalogue order
    pub const ALL: [Lang; 3] = [Lang::Fi, Lang::Sv, Lang::En];
}

/// Three-language string triple
///
/// Every localized cell in a draft is fully populated: a cell that was
/// never written holds empty strings in all three languages. Writing one
/// language of a fresh cell materializes the other two as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub fi: String,
    pub sv: String,
    pub en: String,
}

impl LocalizedText {
    /// Build a cell with a single language set, the others empty
    pub fn with(lang: Lang, value: impl Into<String>) -> Self {
        let mut text = Self::default();
        text.set(lang, value);
        text
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Fi => &self.fi,
            Lang::Sv => &self.sv,
            Lang::En => &self.en,
        }
    }

    pub fn set(&mut self, lang: Lang, value: impl Into<String>) {
        let slot = match lang {
            Lang::Fi => &mut self.fi,
            Lang::Sv => &mut self.sv,
            Lang::En => &mut self.en,
        };
        *slot = value.into();
    }

    /// True when at least one language variant is non-empty after trimming
    pub fn has_content(&self) -> bool {
        Lang::ALL.iter().any(|lang| !self.get(*lang).trim().is_empty())
    }
}
