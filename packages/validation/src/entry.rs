use serde::{Deserialize, Serialize};

/// A single validation message keyed by the position of the field or
/// collection element that failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationEntry {
    /// Dash-joined path key, e.g. `name`, `vtsName-0`, `vhfChannel-0-1`
    pub path_key: String,
    /// Translated message; empty when the entry has been cleared
    pub message: String,
}

impl ValidationEntry {
    pub fn new(path_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path_key: path_key.into(),
            message: message.into(),
        }
    }
}

/// True when an entry with this key exists and carries a non-empty message
pub fn has_active_entry(entries: &[ValidationEntry], key: &str) -> bool {
    entries
        .iter()
        .any(|entry| entry.path_key == key && !entry.message.is_empty())
}

/// Replace the entry for `key` with a recomputed message
///
/// Any existing entries for the key are dropped and a single entry with
/// the new message is appended, so the entry survives with an empty
/// message when the rule clears it.
pub fn replace_entry(
    entries: &[ValidationEntry],
    key: &str,
    message: impl Into<String>,
) -> Vec<ValidationEntry> {
    let mut next: Vec<ValidationEntry> = entries
        .iter()
        .filter(|entry| entry.path_key != key)
        .cloned()
        .collect();
    next.push(ValidationEntry::new(key, message));
    next
}
