//! # Fairway Validation
//!
//! Validation state for draft editing: the flat `{path key, message}`
//! entry list surfaced next to the form, the typed path keys that
//! address fields and repeated-collection elements, the renumbering
//! pass that keeps positional entries aligned after removals, and the
//! rule functions the editor binds to individual edit actions.
//!
//! Entries are never thrown; editing continues regardless of
//! outstanding messages. A cleared message keeps its entry with an
//! empty string so the caller can keep selecting by key.

pub mod entry;
pub mod messages;
pub mod path;
pub mod renumber;
pub mod rules;

pub use entry::{has_active_entry, replace_entry, ValidationEntry};
pub use messages::{KeyTranslator, MessageKey, Translate};
pub use path::PathKey;
pub use renumber::{
    renumber_after_remove, renumber_inner_after_remove, renumber_outer_after_remove,
};
