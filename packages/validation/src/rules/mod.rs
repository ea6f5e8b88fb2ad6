//! Rule functions the editor binds to individual edit actions
//!
//! Every rule is a pure function from the resulting draft value to a
//! message string; an empty string means "cleared". The caller decides
//! whether a rule is sticky (recomputed only for an already-flagged
//! key) or unconditional.

mod date;
mod location;
mod required;

pub use date::{end_date_message, parse_entry_date, start_date_message};
pub use location::{coordinate_pair, is_duplicate_location};
pub use required::{
    localized_flag_message, primary_id_message, required_list_message, required_scalar_message,
};
