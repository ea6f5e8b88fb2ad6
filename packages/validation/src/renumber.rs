//! Positional renumbering after a collection removal
//!
//! All three passes share the same shape: walk the entry list in order,
//! leave non-matching entries untouched, drop the entry at the removed
//! position and shift every later matching position down by one with
//! its message preserved. The result is a fresh list; inputs are never
//! mutated.

use crate::entry::ValidationEntry;
use crate::path::PathKey;

/// Renumber single-level keys `<base>-<i>` after removing element `removed`
pub fn renumber_after_remove(
    entries: &[ValidationEntry],
    base: &str,
    removed: usize,
) -> Vec<ValidationEntry> {
    entries
        .iter()
        .filter_map(|entry| match PathKey::parse(&entry.path_key) {
            PathKey::Element { base: b, index } if b == base => {
                shift(index, removed).map(|index| ValidationEntry {
                    path_key: PathKey::element(b, index).to_string(),
                    message: entry.message.clone(),
                })
            }
            _ => Some(entry.clone()),
        })
        .collect()
}

/// Renumber nested keys `<base>-<outer>-<i>` within one outer element
///
/// Keys under any other outer index are left untouched.
pub fn renumber_inner_after_remove(
    entries: &[ValidationEntry],
    base: &str,
    outer: usize,
    removed: usize,
) -> Vec<ValidationEntry> {
    entries
        .iter()
        .filter_map(|entry| match PathKey::parse(&entry.path_key) {
            PathKey::Nested {
                base: b,
                outer: o,
                inner,
            } if b == base && o == outer => shift(inner, removed).map(|inner| ValidationEntry {
                path_key: PathKey::nested(b, o, inner).to_string(),
                message: entry.message.clone(),
            }),
            _ => Some(entry.clone()),
        })
        .collect()
}

/// Rewrite the OUTER component of nested keys after removing an entire
/// outer element; inner components are preserved as-is
pub fn renumber_outer_after_remove(
    entries: &[ValidationEntry],
    base: &str,
    removed: usize,
) -> Vec<ValidationEntry> {
    entries
        .iter()
        .filter_map(|entry| match PathKey::parse(&entry.path_key) {
            PathKey::Nested {
                base: b,
                outer,
                inner,
            } if b == base => shift(outer, removed).map(|outer| ValidationEntry {
                path_key: PathKey::nested(b, outer, inner).to_string(),
                message: entry.message.clone(),
            }),
            _ => Some(entry.clone()),
        })
        .collect()
}

// before the removed position: keep; at it: drop; after it: shift down
fn shift(index: usize, removed: usize) -> Option<usize> {
    match index {
        i if i < removed => Some(i),
        i if i == removed => None,
        i => Some(i - 1),
    }
}
