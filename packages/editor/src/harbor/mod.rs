//! Harbor dispatcher and top-level field reducer

mod quay;

use fairway_model::{HarborDraft, LocalizedText, Status};
use fairway_validation::{rules, ValidationEntry};

use crate::actions::HarborAction;
use crate::context::EditContext;
use crate::outcome::{EditOutcome, EditResult, IgnoreReason};
use crate::support::{sticky_validation, text_list_value, text_value, Step};
use crate::value::FieldValue;

/// Apply one edit to a harbor draft
///
/// Same contract as [`crate::reduce_fairway_card`]: fresh values out,
/// the complete replacement entry list through the callback at most
/// once, malformed calls absorbed as typed no-ops.
pub fn reduce_harbor(
    state: &HarborDraft,
    value: &FieldValue,
    action: HarborAction,
    validation_errors: &[ValidationEntry],
    set_validation_errors: &mut dyn FnMut(Vec<ValidationEntry>),
    ctx: &EditContext<'_>,
) -> EditResult<HarborDraft> {
    match apply(state, value, action, validation_errors, ctx) {
        Ok((next, validation)) => {
            tracing::debug!(?action, "applied harbor edit");
            if let Some(entries) = validation {
                set_validation_errors(entries);
            }
            EditResult {
                state: next,
                outcome: EditOutcome::Applied,
            }
        }
        Err(reason) => {
            tracing::warn!(?action, %reason, "ignored malformed harbor edit");
            EditResult {
                state: state.clone(),
                outcome: EditOutcome::Ignored(reason),
            }
        }
    }
}

fn apply(
    state: &HarborDraft,
    value: &FieldValue,
    action: HarborAction,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    use HarborAction as A;

    match action {
        A::PrimaryId => {
            let text = text_value(value)?;
            let mut next = state.clone();
            next.id = text.to_string();
            let validation = sticky_validation(entries, "primaryId", || {
                rules::primary_id_message(&next.id, ctx.reserved_ids, ctx.translator)
            });
            Ok((next, validation))
        }
        A::Name => set_localized(state, value, entries, ctx, "name", |draft| &mut draft.name),
        A::Status => {
            let status: Status = text_value(value)?
                .parse()
                .map_err(|_| IgnoreReason::ValueShape)?;
            let mut next = state.clone();
            next.status = status;
            Ok((next, None))
        }
        A::ExtraInfo => set_localized(state, value, entries, ctx, "extraInfo", |draft| {
            &mut draft.extra_info
        }),
        A::Cargo => set_localized(state, value, entries, ctx, "cargo", |draft| &mut draft.cargo),
        A::HarborBasin => set_localized(state, value, entries, ctx, "harborBasin", |draft| {
            &mut draft.harbor_basin
        }),
        A::Company => set_localized(state, value, entries, ctx, "company", |draft| {
            &mut draft.company
        }),

        A::Email => set_scalar(state, value, entries, ctx, "email", |draft| &mut draft.email),
        A::Fax => set_scalar(state, value, entries, ctx, "fax", |draft| &mut draft.fax),
        A::Internet => set_scalar(state, value, entries, ctx, "internet", |draft| {
            &mut draft.internet
        }),
        A::Lat => set_scalar(state, value, entries, ctx, "lat", |draft| &mut draft.lat),
        A::Lon => set_scalar(state, value, entries, ctx, "lon", |draft| &mut draft.lon),
        A::PhoneNumbers => {
            let numbers = text_list_value(value)?;
            let mut next = state.clone();
            next.phone_numbers = numbers.to_vec();
            let validation = sticky_validation(entries, "phoneNumber", || {
                rules::required_list_message(numbers, ctx.translator)
            });
            Ok((next, validation))
        }

        A::Quay => quay::apply_toggle(state, value, entries, ctx),
        A::QuayName => quay::apply_name(state, value, entries, ctx),
        A::QuayLength => quay::apply_length(state, value, entries, ctx),
        A::QuayLat => quay::apply_lat(state, value, entries, ctx),
        A::QuayLon => quay::apply_lon(state, value, entries, ctx),
        A::QuayExtraInfo => quay::apply_extra_info(state, value, entries, ctx),
        A::Section => quay::apply_section_toggle(state, value, entries, ctx),
        A::SectionDepth => quay::apply_section_depth(state, value, ctx),
        A::SectionLat => quay::apply_section_lat(state, value, entries, ctx),
        A::SectionLon => quay::apply_section_lon(state, value, entries, ctx),
    }
}

fn set_localized(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
    key: &str,
    select: impl Fn(&mut HarborDraft) -> &mut LocalizedText,
) -> Step<HarborDraft> {
    let lang = ctx.require_lang()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let cell = select(&mut next);
    cell.set(lang, text);
    let cell = cell.clone();
    let validation = sticky_validation(entries, key, || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

fn set_scalar(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
    key: &str,
    select: impl Fn(&mut HarborDraft) -> &mut String,
) -> Step<HarborDraft> {
    let text = text_value(value)?;
    let mut next = state.clone();
    *select(&mut next) = text.to_string();
    let owned = text.to_string();
    let validation = sticky_validation(entries, key, || {
        rules::required_scalar_message(&owned, ctx.translator)
    });
    Ok((next, validation))
}
