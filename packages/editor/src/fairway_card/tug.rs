//! Tug contact list edits

use fairway_model::{FairwayCardDraft, Tug};
use fairway_validation::{renumber_after_remove, rules, ValidationEntry};

use crate::context::EditContext;
use crate::support::{
    checked_remove, collection_op, element_mut, sticky_validation, text_value, CollectionOp, Step,
};
use crate::value::FieldValue;

pub(crate) fn apply_toggle(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let mut next = state.clone();
    match collection_op(value, ctx)? {
        CollectionOp::Append => {
            next.traffic_service.tug.push(Tug::default());
            Ok((next, None))
        }
        CollectionOp::Remove(index) => {
            checked_remove(&mut next.traffic_service.tug, index)?;
            Ok((next, Some(renumber_after_remove(entries, "tugName", index))))
        }
    }
}

pub(crate) fn apply_name(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let lang = ctx.require_lang()?;
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let tug = element_mut(&mut next.traffic_service.tug, index)?;
    tug.name.set(lang, text);
    let cell = tug.name.clone();
    let validation = sticky_validation(entries, &format!("tugName-{index}"), || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

pub(crate) fn apply_email(
    state: &FairwayCardDraft,
    value: &FieldValue,
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.traffic_service.tug, index)?.email = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_phone(
    state: &FairwayCardDraft,
    value: &FieldValue,
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.traffic_service.tug, index)?.phone_number = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_fax(
    state: &FairwayCardDraft,
    value: &FieldValue,
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.traffic_service.tug, index)?.fax = text.to_string();
    Ok((next, None))
}
