//! Pilotage block edits

use fairway_model::FairwayCardDraft;
use fairway_validation::{rules, ValidationEntry};

use crate::context::EditContext;
use crate::outcome::IgnoreReason;
use crate::support::{sticky_validation, text_value, Step};
use crate::value::FieldValue;

pub(crate) fn apply_email(state: &FairwayCardDraft, value: &FieldValue) -> Step<FairwayCardDraft> {
    let text = text_value(value)?;
    let mut next = state.clone();
    next.traffic_service.pilot.email = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_phone(state: &FairwayCardDraft, value: &FieldValue) -> Step<FairwayCardDraft> {
    let text = text_value(value)?;
    let mut next = state.clone();
    next.traffic_service.pilot.phone_number = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_fax(state: &FairwayCardDraft, value: &FieldValue) -> Step<FairwayCardDraft> {
    let text = text_value(value)?;
    let mut next = state.clone();
    next.traffic_service.pilot.fax = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_extra_info(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let lang = ctx.require_lang()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    next.traffic_service.pilot.extra_info.set(lang, text);
    let cell = next.traffic_service.pilot.extra_info.clone();
    let validation = sticky_validation(entries, "pilotExtraInfo", || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

/// Boarding places arrive as a complete replacement list
pub(crate) fn apply_places(state: &FairwayCardDraft, value: &FieldValue) -> Step<FairwayCardDraft> {
    let places = value.as_pilot_places().ok_or(IgnoreReason::ValueShape)?;
    let mut next = state.clone();
    next.traffic_service.pilot.places = places.to_vec();
    Ok((next, None))
}
