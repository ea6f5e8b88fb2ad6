//! # Fairway Editor
//!
//! Edit-and-reindex engine for fairway card and harbor drafts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ caller: owns Draft + validation entry list  │
//! └─────────────────────────────────────────────┘
//!                     ↓ one call per UI edit
//! ┌─────────────────────────────────────────────┐
//! │ editor: action dispatch + reducers          │
//! │  - field reducer (scalar / localized)       │
//! │  - collection reducer (append/remove/edit)  │
//! │  - nested collection reducer (outer,inner)  │
//! │  - per-action re-validation rules           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validation: entry list renumbering + rules  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Pure transitions**: every call receives the full draft and
//!    entry list and returns fresh values; inputs are never mutated.
//! 2. **Index is identity**: collection elements are addressed by
//!    position, so every removal renumbers the matching entries before
//!    the call returns. No entry ever outlives the position it names.
//! 3. **Malformed calls degrade**: a missing language tag, missing
//!    index or mismatched payload returns the input unchanged with a
//!    typed [`EditOutcome::Ignored`] reason and a `tracing` diagnostic,
//!    never a panic.
//!
//! ## Usage
//!
//! ```rust
//! use fairway_editor::{
//!     reduce_fairway_card, EditContext, FairwayCardAction, FieldValue, GroupSequenceSorter,
//! };
//! use fairway_model::{FairwayCardDraft, Lang};
//! use fairway_validation::KeyTranslator;
//!
//! let draft = FairwayCardDraft::default();
//! let errors = Vec::new();
//! let mut next_errors = None;
//!
//! let ctx = EditContext::new(&KeyTranslator, &GroupSequenceSorter).lang(Lang::Fi);
//! let result = reduce_fairway_card(
//!     &draft,
//!     &FieldValue::Text("Kvarken".into()),
//!     FairwayCardAction::Name,
//!     &errors,
//!     &mut |entries| next_errors = Some(entries),
//!     &ctx,
//! );
//! assert_eq!(result.state.name.fi, "Kvarken");
//! assert!(next_errors.is_none()); // nothing was flagged, nothing recomputed
//! ```

mod actions;
mod context;
mod fairway_card;
mod harbor;
mod outcome;
mod support;
mod value;

pub use actions::{FairwayCardAction, HarborAction};
pub use context::{EditContext, GroupSequenceSorter, MediaSorter};
pub use fairway_card::reduce_fairway_card;
pub use harbor::reduce_harbor;
pub use outcome::{EditOutcome, EditResult, IgnoreReason};
pub use value::FieldValue;

// Re-export the boundary types callers hold between edits
pub use fairway_model::{FairwayCardDraft, HarborDraft};
pub use fairway_validation::ValidationEntry;
