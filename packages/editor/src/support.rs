//! Shared plumbing for the two dispatchers

use fairway_validation::{has_active_entry, replace_entry, ValidationEntry};

use crate::context::EditContext;
use crate::outcome::IgnoreReason;
use crate::value::FieldValue;

/// Outcome of one structural step: the next draft plus the recomputed
/// entry list, or `None` when the validation state is untouched
pub(crate) type Step<T> = Result<(T, Option<Vec<ValidationEntry>>), IgnoreReason>;

/// Append/remove discrimination for a single-level collection action
///
/// A truthy value with no target appends; a falsy value with a target
/// removes that element. Any other shape is malformed.
#[derive(Debug)]
pub(crate) enum CollectionOp {
    Append,
    Remove(usize),
}

pub(crate) fn collection_op(
    value: &FieldValue,
    ctx: &EditContext<'_>,
) -> Result<CollectionOp, IgnoreReason> {
    match (value.is_truthy(), ctx.target) {
        (true, None) => Ok(CollectionOp::Append),
        (false, Some(index)) => Ok(CollectionOp::Remove(index)),
        (false, None) => Err(IgnoreReason::MissingTarget),
        (true, Some(_)) => Err(IgnoreReason::ValueShape),
    }
}

/// Append/remove discrimination for a two-level collection action
///
/// Appending addresses the outer element receiving the new inner
/// element; removal needs both indices.
#[derive(Debug)]
pub(crate) enum NestedOp {
    Append { outer: usize },
    Remove { outer: usize, inner: usize },
}

pub(crate) fn nested_collection_op(
    value: &FieldValue,
    ctx: &EditContext<'_>,
) -> Result<NestedOp, IgnoreReason> {
    let outer = ctx.require_outer_target()?;
    if value.is_truthy() {
        match ctx.target {
            None => Ok(NestedOp::Append { outer }),
            Some(_) => Err(IgnoreReason::ValueShape),
        }
    } else {
        let inner = ctx.require_target()?;
        Ok(NestedOp::Remove { outer, inner })
    }
}

/// Sticky re-validation: recompute the message for `key` only when the
/// key is already flagged, otherwise leave the entry list untouched
pub(crate) fn sticky_validation(
    entries: &[ValidationEntry],
    key: &str,
    message: impl FnOnce() -> String,
) -> Option<Vec<ValidationEntry>> {
    if has_active_entry(entries, key) {
        Some(replace_entry(entries, key, message()))
    } else {
        None
    }
}

pub(crate) fn text_value(value: &FieldValue) -> Result<&str, IgnoreReason> {
    value.as_text().ok_or(IgnoreReason::ValueShape)
}

pub(crate) fn text_list_value(value: &FieldValue) -> Result<&[String], IgnoreReason> {
    value.as_text_list().ok_or(IgnoreReason::ValueShape)
}

pub(crate) fn number_list_value(value: &FieldValue) -> Result<&[i64], IgnoreReason> {
    value.as_number_list().ok_or(IgnoreReason::ValueShape)
}

/// Bounds-checked element access for positional updates
pub(crate) fn element_mut<T>(elements: &mut [T], index: usize) -> Result<&mut T, IgnoreReason> {
    elements.get_mut(index).ok_or(IgnoreReason::TargetOutOfBounds)
}

pub(crate) fn checked_remove<T>(elements: &mut Vec<T>, index: usize) -> Result<T, IgnoreReason> {
    if index >= elements.len() {
        return Err(IgnoreReason::TargetOutOfBounds);
    }
    Ok(elements.remove(index))
}
