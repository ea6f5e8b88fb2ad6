use serde::{Deserialize, Serialize};

use crate::status::Status;
use crate::text::LocalizedText;

/// Fairway card draft document
///
/// The root record for one navigable fairway: identification, localized
/// prose sections, traffic service contacts and media attachments.
/// Element identity inside every repeated collection is positional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FairwayCardDraft {
    /// Primary id, unique across all fairway cards
    pub id: String,
    pub name: LocalizedText,
    pub status: Status,
    pub group: String,
    /// Fairways covered by this card
    pub fairway_ids: Vec<i64>,
    pub primary_fairway_id: Vec<i64>,
    pub secondary_fairway_id: Vec<i64>,
    /// Linked harbor documents
    pub harbor_ids: Vec<String>,
    pub mareograph_ids: Vec<i64>,
    pub additional_info: LocalizedText,
    pub line_text: LocalizedText,
    pub design_speed: LocalizedText,
    pub speed_limit: LocalizedText,
    pub anchorage: LocalizedText,
    pub navigation_condition: LocalizedText,
    pub ice_condition: LocalizedText,
    pub wind_recommendation: LocalizedText,
    pub vessel_recommendation: LocalizedText,
    pub visibility: LocalizedText,
    pub traffic_service: TrafficService,
    pub temporary_notifications: Vec<TemporaryNotification>,
    pub pictures: Vec<Picture>,
}

/// Traffic service block: pilotage plus the VTS and tug contact lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficService {
    pub pilot: Pilot,
    pub vts: Vec<Vts>,
    pub tug: Vec<Tug>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pilot {
    pub email: String,
    pub phone_number: String,
    pub fax: String,
    pub extra_info: LocalizedText,
    pub places: Vec<PilotPlace>,
}

/// Pilot boarding place, replaced in bulk from the selection dialog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PilotPlace {
    pub id: i64,
    pub pilotage_limit: Option<f64>,
}

/// Vessel traffic service center entry, with its own radio channel list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vts {
    pub name: LocalizedText,
    pub email: Vec<String>,
    pub phone_number: String,
    pub vhf: Vec<Vhf>,
}

/// VHF radio channel entry nested under a VTS center
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vhf {
    pub name: LocalizedText,
    pub channel: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tug {
    pub name: LocalizedText,
    pub email: String,
    pub phone_number: String,
    pub fax: String,
}

/// Time-bound notice shown on the published card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryNotification {
    pub content: LocalizedText,
    pub start_date: String,
    pub end_date: String,
}

/// Media attachment; ordering is (group id, sequence number)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub id: String,
    pub text: String,
    pub lang: String,
    pub orientation: Orientation,
    pub group_id: i64,
    pub sequence_number: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}
