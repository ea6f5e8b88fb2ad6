//! # Edit actions
//!
//! One closed tag per editable field and per collection toggle, one
//! enum per document kind. The dispatchers match these exhaustively,
//! so adding a field is a compile-time checklist: extend the enum,
//! extend the match, bind the validation rule.
//!
//! ## Action semantics
//!
//! ### Field tags
//! - Scalar tags replace the field from a [`crate::FieldValue::Text`]
//!   (or list) payload
//! - Localized tags additionally need the language tag on the context;
//!   a missing tag is a defensive no-op
//!
//! ### Collection toggles
//! - A truthy payload with no target index appends a fully-defaulted
//!   element
//! - A falsy payload with a target index removes that element and
//!   renumbers every tracked validation key of the collection
//!
//! ### Element field tags
//! - Need the target index (and the outer target index for two-level
//!   collections); the untouched elements are carried over verbatim

use serde::{Deserialize, Serialize};

/// Editable positions of a fairway card draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FairwayCardAction {
    // identification
    PrimaryId,
    Name,
    Status,
    Group,

    // fairway linkage; a single-id selection mirrors into the
    // primary/secondary designations
    FairwayIds,
    FairwayPrimary,
    FairwaySecondary,
    Harbors,
    MareographIds,

    // localized prose sections
    AdditionalInfo,
    LineText,
    DesignSpeed,
    SpeedLimit,
    Anchorage,
    NavigationCondition,
    IceCondition,
    WindRecommendation,
    VesselRecommendation,
    Visibility,

    // pilotage
    PilotEmail,
    PilotPhone,
    PilotFax,
    PilotExtraInfo,
    PilotPlaces,

    // vessel traffic service centers and their radio channels
    Vts,
    VtsName,
    VtsEmail,
    VtsPhone,
    Vhf,
    VhfName,
    VhfChannel,

    // tug contacts
    Tug,
    TugName,
    TugEmail,
    TugPhone,
    TugFax,

    // time-bound notices
    TemporaryNotifications,
    TemporaryNotificationContent,
    TemporaryNotificationStartDate,
    TemporaryNotificationEndDate,

    // media attachments, bulk-replaced and sorted
    Pictures,
}

/// Editable positions of a harbor draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HarborAction {
    // identification and contact details
    PrimaryId,
    Name,
    Status,
    ExtraInfo,
    Cargo,
    HarborBasin,
    Company,
    Email,
    Fax,
    Internet,
    Lat,
    Lon,
    PhoneNumbers,

    // quays and their depth sections
    Quay,
    QuayName,
    QuayLength,
    QuayLat,
    QuayLon,
    QuayExtraInfo,
    Section,
    SectionDepth,
    SectionLat,
    SectionLon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&FairwayCardAction::VhfChannel).unwrap();
        assert_eq!(json, "\"vhfChannel\"");

        let back: HarborAction = serde_json::from_str("\"quayExtraInfo\"").unwrap();
        assert_eq!(back, HarborAction::QuayExtraInfo);
    }
}
