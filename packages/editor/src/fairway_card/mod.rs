//! Fairway card dispatcher and top-level field reducer
//!
//! Collection handling lives in the per-entity modules; this module
//! routes the action tag and applies the scalar/localized field edits
//! together with their sticky re-validation.

mod notifications;
mod pilot;
mod tug;
mod vts;

use fairway_model::{FairwayCardDraft, LocalizedText, Status};
use fairway_validation::{rules, ValidationEntry};

use crate::actions::FairwayCardAction;
use crate::context::EditContext;
use crate::outcome::{EditOutcome, EditResult, IgnoreReason};
use crate::support::{number_list_value, sticky_validation, text_list_value, text_value, Step};
use crate::value::FieldValue;

/// Apply one edit to a fairway card draft
///
/// Returns the next draft and, when the edit touched validation state,
/// hands the complete replacement entry list to
/// `set_validation_errors` (called at most once). Malformed calls are
/// absorbed: the input draft is returned value-equal and the entry
/// list callback is not invoked.
pub fn reduce_fairway_card(
    state: &FairwayCardDraft,
    value: &FieldValue,
    action: FairwayCardAction,
    validation_errors: &[ValidationEntry],
    set_validation_errors: &mut dyn FnMut(Vec<ValidationEntry>),
    ctx: &EditContext<'_>,
) -> EditResult<FairwayCardDraft> {
    match apply(state, value, action, validation_errors, ctx) {
        Ok((next, validation)) => {
            tracing::debug!(?action, "applied fairway card edit");
            if let Some(entries) = validation {
                set_validation_errors(entries);
            }
            EditResult {
                state: next,
                outcome: EditOutcome::Applied,
            }
        }
        Err(reason) => {
            tracing::warn!(?action, %reason, "ignored malformed fairway card edit");
            EditResult {
                state: state.clone(),
                outcome: EditOutcome::Ignored(reason),
            }
        }
    }
}

fn apply(
    state: &FairwayCardDraft,
    value: &FieldValue,
    action: FairwayCardAction,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    use FairwayCardAction as A;

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
        A::Group => {
            let text = text_value(value)?;
            let mut next = state.clone();
            next.group = text.to_string();
            let validation = sticky_validation(entries, "group", || {
                rules::required_scalar_message(&next.group, ctx.translator)
            });
            Ok((next, validation))
        }
        A::FairwayIds => {
            let ids = number_list_value(value)?;
            let mut next = state.clone();
            next.fairway_ids = ids.to_vec();
            // an exclusive selection is mirrored into both designations
            if let [only] = ids {
                next.primary_fairway_id = vec![*only];
                next.secondary_fairway_id = vec![*only];
            }
            let validation = sticky_validation(entries, "fairwayIds", || {
                rules::required_list_message(ids, ctx.translator)
            });
            Ok((next, validation))
        }
        A::FairwayPrimary => {
            let ids = number_list_value(value)?;
            let mut next = state.clone();
            next.primary_fairway_id = ids.to_vec();
            Ok((next, None))
        }
        A::FairwaySecondary => {
            let ids = number_list_value(value)?;
            let mut next = state.clone();
            next.secondary_fairway_id = ids.to_vec();
            Ok((next, None))
        }
        A::Harbors => {
            let ids = text_list_value(value)?;
            let mut next = state.clone();
            next.harbor_ids = ids.to_vec();
            Ok((next, None))
        }
        A::MareographIds => {
            let ids = number_list_value(value)?;
            let mut next = state.clone();
            next.mareograph_ids = ids.to_vec();
            Ok((next, None))
        }

        A::AdditionalInfo => set_localized(state, value, entries, ctx, "additionalInfo", |draft| {
            &mut draft.additional_info
        }),
        A::LineText => set_localized(state, value, entries, ctx, "line", |draft| {
            &mut draft.line_text
        }),
        A::DesignSpeed => set_localized(state, value, entries, ctx, "designSpeed", |draft| {
            &mut draft.design_speed
        }),
        A::SpeedLimit => set_localized(state, value, entries, ctx, "speedLimit", |draft| {
            &mut draft.speed_limit
        }),
        A::Anchorage => set_localized(state, value, entries, ctx, "anchorage", |draft| {
            &mut draft.anchorage
        }),
        A::NavigationCondition => {
            set_localized(state, value, entries, ctx, "navigationCondition", |draft| {
                &mut draft.navigation_condition
            })
        }
        A::IceCondition => set_localized(state, value, entries, ctx, "iceCondition", |draft| {
            &mut draft.ice_condition
        }),
        A::WindRecommendation => {
            set_localized(state, value, entries, ctx, "windRecommendation", |draft| {
                &mut draft.wind_recommendation
            })
        }
        A::VesselRecommendation => {
            set_localized(state, value, entries, ctx, "vesselRecommendation", |draft| {
                &mut draft.vessel_recommendation
            })
        }
        A::Visibility => set_localized(state, value, entries, ctx, "visibility", |draft| {
            &mut draft.visibility
        }),

        A::PilotEmail => pilot::apply_email(state, value),
        A::PilotPhone => pilot::apply_phone(state, value),
        A::PilotFax => pilot::apply_fax(state, value),
        A::PilotExtraInfo => pilot::apply_extra_info(state, value, entries, ctx),
        A::PilotPlaces => pilot::apply_places(state, value),

        A::Vts => vts::apply_toggle(state, value, entries, ctx),
        A::VtsName => vts::apply_name(state, value, entries, ctx),
        A::VtsEmail => vts::apply_email(state, value, ctx),
        A::VtsPhone => vts::apply_phone(state, value, ctx),
        A::Vhf => vts::apply_vhf_toggle(state, value, entries, ctx),
        A::VhfName => vts::apply_vhf_name(state, value, entries, ctx),
        A::VhfChannel => vts::apply_vhf_channel(state, value, entries, ctx),

        A::Tug => tug::apply_toggle(state, value, entries, ctx),
        A::TugName => tug::apply_name(state, value, entries, ctx),
        A::TugEmail => tug::apply_email(state, value, ctx),
        A::TugPhone => tug::apply_phone(state, value, ctx),
        A::TugFax => tug::apply_fax(state, value, ctx),

        A::TemporaryNotifications => notifications::apply_toggle(state, value, entries, ctx),
        A::TemporaryNotificationContent => {
            notifications::apply_content(state, value, entries, ctx)
        }
        A::TemporaryNotificationStartDate => {
            notifications::apply_start_date(state, value, entries, ctx)
        }
        A::TemporaryNotificationEndDate => {
            notifications::apply_end_date(state, value, entries, ctx)
        }

        A::Pictures => {
            let pictures = value.as_pictures().ok_or(IgnoreReason::ValueShape)?;
            let mut next = state.clone();
            next.pictures = ctx.media_sorter.sort(pictures.to_vec());
            Ok((next, None))
        }
    }
}

/// Localized field write with its sticky flag recompute
fn set_localized(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
    key: &str,
    select: impl Fn(&mut FairwayCardDraft) -> &mut LocalizedText,
) -> Step<FairwayCardDraft> {
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
