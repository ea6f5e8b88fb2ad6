//! Temporary notification list edits
//!
//! Date checks are unconditional: editing either date of an element
//! recomputes both of its date entries, since the ordering check reads
//! the pair. Removal renumbers the three tracked prefixes and then
//! re-runs the date rule for the element that slid into the removed
//! slot, APPENDING its entries. Callers assert on the resulting array
//! offsets, duplicates included; do not collapse them.

use fairway_model::{FairwayCardDraft, TemporaryNotification};
use fairway_validation::{renumber_after_remove, replace_entry, rules, ValidationEntry};

use crate::context::EditContext;
use crate::support::{
    checked_remove, collection_op, element_mut, sticky_validation, text_value, CollectionOp, Step,
};
use crate::value::FieldValue;

const CONTENT: &str = "temporaryNotificationContent";
const START_DATE: &str = "temporaryNotificationStartDate";
const END_DATE: &str = "temporaryNotificationEndDate";

pub(crate) fn apply_toggle(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let mut next = state.clone();
    match collection_op(value, ctx)? {
        CollectionOp::Append => {
            next.temporary_notifications
                .push(TemporaryNotification::default());
            Ok((next, None))
        }
        CollectionOp::Remove(index) => {
            checked_remove(&mut next.temporary_notifications, index)?;
            let renumbered = renumber_after_remove(entries, CONTENT, index);
            let renumbered = renumber_after_remove(&renumbered, START_DATE, index);
            let mut renumbered = renumber_after_remove(&renumbered, END_DATE, index);
            if let Some(slid) = next.temporary_notifications.get(index) {
                renumbered.push(ValidationEntry::new(
                    format!("{START_DATE}-{index}"),
                    rules::start_date_message(&slid.start_date, ctx.translator),
                ));
                renumbered.push(ValidationEntry::new(
                    format!("{END_DATE}-{index}"),
                    rules::end_date_message(&slid.start_date, &slid.end_date, ctx.translator),
                ));
            }
            Ok((next, Some(renumbered)))
        }
    }
}

pub(crate) fn apply_content(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let lang = ctx.require_lang()?;
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let notification = element_mut(&mut next.temporary_notifications, index)?;
    notification.content.set(lang, text);
    let cell = notification.content.clone();
    let validation = sticky_validation(entries, &format!("{CONTENT}-{index}"), || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

pub(crate) fn apply_start_date(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.temporary_notifications, index)?.start_date = text.to_string();
    let validation = date_validation(&next, entries, index, ctx);
    Ok((next, Some(validation)))
}

pub(crate) fn apply_end_date(
    state: &FairwayCardDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<FairwayCardDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.temporary_notifications, index)?.end_date = text.to_string();
    let validation = date_validation(&next, entries, index, ctx);
    Ok((next, Some(validation)))
}

/// Recompute both date entries of the element at `index`
fn date_validation(
    next: &FairwayCardDraft,
    entries: &[ValidationEntry],
    index: usize,
    ctx: &EditContext<'_>,
) -> Vec<ValidationEntry> {
    let notification = &next.temporary_notifications[index];
    let with_start = replace_entry(
        entries,
        &format!("{START_DATE}-{index}"),
        rules::start_date_message(&notification.start_date, ctx.translator),
    );
    replace_entry(
        &with_start,
        &format!("{END_DATE}-{index}"),
        rules::end_date_message(
            &notification.start_date,
            &notification.end_date,
            ctx.translator,
        ),
    )
}
