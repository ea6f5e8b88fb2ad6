//! VTS center list and its nested radio channel list
//!
//! Removing a center renumbers the single-level `vtsName-` keys and
//! rewrites the outer component of every nested `vhfName-`/`vhfChannel-`
//! key; removing a channel renumbers only the inner components under
//! that center.

use fairway_model::{FairwayCardDraft, Vhf, Vts};
use fairway_validation::{
    renumber_after_remove, renumber_inner_after_remove, renumber_outer_after_remove, rules,
    ValidationEntry,
};

use crate::context::EditContext;
use crate::support::{
    checked_remove, collection_op, element_mut, nested_collection_op, sticky_validation,
    text_list_value, text_value, CollectionOp, NestedOp, Step,
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
            next.traffic_service.vts.push(Vts::default());
            Ok((next, None))
        }
        CollectionOp::Remove(index) => {
            checked_remove(&mut next.traffic_service.vts, index)?;
            let renumbered = renumber_after_remove(entries, "vtsName", index);
            let renumbered = renumber_outer_after_remove(&renumbered, "vhfName", index);
            let renumbered = renumber_outer_after_remove(&renumbered, "vhfChannel", index);
            Ok((next, Some(renumbered)))
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
    let vts = element_mut(&mut next.traffic_service.vts, index)?;
    vts.name.set(lang, text);
    let cell = vts.name.clone();
    let validation = sticky_validation(entries, &format!("vtsName-{index}"), || {
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
    let emails = text_list_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.traffic_service.vts, index)?.email = emails.to_vec();
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
    element_mut(&mut next.traffic_service.vts, index)?.phone_number = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_vhf_toggle(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let mut next = state.clone();
    match nested_collection_op(value, ctx)? {
        NestedOp::Append { outer } => {
            element_mut(&mut next.traffic_service.vts, outer)?
                .vhf
                .push(Vhf::default());
            Ok((next, None))
        }
        NestedOp::Remove { outer, inner } => {
            let vts = element_mut(&mut next.traffic_service.vts, outer)?;
            checked_remove(&mut vts.vhf, inner)?;
            let renumbered = renumber_inner_after_remove(entries, "vhfName", outer, inner);
            let renumbered = renumber_inner_after_remove(&renumbered, "vhfChannel", outer, inner);
            Ok((next, Some(renumbered)))
        }
    }
}

pub(crate) fn apply_vhf_name(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let lang = ctx.require_lang()?;
    let outer = ctx.require_outer_target()?;
    let inner = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let vts = element_mut(&mut next.traffic_service.vts, outer)?;
    let vhf = element_mut(&mut vts.vhf, inner)?;
    vhf.name.set(lang, text);
    let cell = vhf.name.clone();
    let validation = sticky_validation(entries, &format!("vhfName-{outer}-{inner}"), || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

pub(crate) fn apply_vhf_channel(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let outer = ctx.require_outer_target()?;
    let inner = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let vts = element_mut(&mut next.traffic_service.vts, outer)?;
    element_mut(&mut vts.vhf, inner)?.channel = text.to_string();
    let channel = text.to_string();
    let validation = sticky_validation(entries, &format!("vhfChannel-{outer}-{inner}"), || {
        rules::required_scalar_message(&channel, ctx.translator)
    });
    Ok((next, validation))
}
