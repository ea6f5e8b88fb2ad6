//! # Fairway Model
//!
//! Data model for the two draft document kinds edited by the fairway
//! records tooling: fairway cards and harbors.
//!
//! The model is plain data: serde-derived structs with `Default`
//! constructors that produce fully-populated values (empty localized
//! cells, empty lists). Drafts are owned by the caller; the editor
//! crate only ever transforms them value-to-value.

pub mod fairway_card;
pub mod harbor;
pub mod status;
pub mod text;

pub use fairway_card::{
    FairwayCardDraft, Orientation, Picture, Pilot, PilotPlace, TemporaryNotification,
    TrafficService, Tug, Vhf, Vts,
};
pub use harbor::{HarborDraft, Quay, Section};
pub use status::Status;
pub use text::{Lang, LocalizedText};
