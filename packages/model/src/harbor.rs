use serde::{Deserialize, Serialize};

use crate::status::Status;
use crate::text::LocalizedText;

/// Harbor draft document
///
/// Coordinates are kept as the user-entered strings; coordinate
/// validation and duplicate detection compare the trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarborDraft {
    /// Primary id, unique across all harbors
    pub id: String,
    pub name: LocalizedText,
    pub status: Status,
    pub extra_info: LocalizedText,
    pub cargo: LocalizedText,
    pub harbor_basin: LocalizedText,
    pub company: LocalizedText,
    pub email: String,
    pub fax: String,
    pub internet: String,
    pub lat: String,
    pub lon: String,
    pub phone_numbers: Vec<String>,
    pub quays: Vec<Quay>,
}

/// Quay entry, carrying its own list of depth sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quay {
    pub name: LocalizedText,
    pub length: String,
    pub lat: String,
    pub lon: String,
    pub extra_info: LocalizedText,
    pub sections: Vec<Section>,
}

/// Depth section nested under a quay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub depth: String,
    pub lat: String,
    pub lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harbor_serialization_round_trip() {
        let mut draft = HarborDraft::default();
        draft.id = "vaskiluoto".to_string();
        draft.quays.push(Quay {
            sections: vec![Section::default()],
            ..Quay::default()
        });

        let json = serde_json::to_string(&draft).unwrap();
        let back: HarborDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(draft, back);
    }
}
