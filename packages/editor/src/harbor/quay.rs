//! Quay list and its nested depth section list
//!
//! Coordinate edits run the unconditional duplicate-location rule over
//! the edited element's siblings: quays compare against the other
//! quays, sections against the other sections of the same quay.
//! Removing a section renumbers the nested keys and then re-runs the
//! duplicate-location rule for the section that slid into the removed
//! slot, APPENDING its entry. Callers assert on the resulting array
//! offsets, duplicates included; do not collapse them.

use fairway_model::{HarborDraft, Quay, Section};
use fairway_validation::{
    renumber_after_remove, renumber_inner_after_remove, renumber_outer_after_remove,
    replace_entry, rules, MessageKey, ValidationEntry,
};

use crate::context::EditContext;
use crate::support::{
    checked_remove, collection_op, element_mut, nested_collection_op, sticky_validation,
    text_value, CollectionOp, NestedOp, Step,
};
use crate::value::FieldValue;

// every single-level prefix tracked for the quay collection
const QUAY_PREFIXES: [&str; 6] = [
    "quayName",
    "quayLength",
    "quayLat",
    "quayLon",
    "quayExtraInfo",
    "quayLocation",
];

pub(crate) fn apply_toggle(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    let mut next = state.clone();
    match collection_op(value, ctx)? {
        CollectionOp::Append => {
            next.quays.push(Quay::default());
            Ok((next, None))
        }
        CollectionOp::Remove(index) => {
            checked_remove(&mut next.quays, index)?;
            let mut renumbered = entries.to_vec();
            for prefix in QUAY_PREFIXES {
                renumbered = renumber_after_remove(&renumbered, prefix, index);
            }
            renumbered = renumber_outer_after_remove(&renumbered, "sectionGeometry", index);
            renumbered = renumber_outer_after_remove(&renumbered, "sectionLocation", index);
            Ok((next, Some(renumbered)))
        }
    }
}

pub(crate) fn apply_name(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    let lang = ctx.require_lang()?;
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let quay = element_mut(&mut next.quays, index)?;
    quay.name.set(lang, text);
    let cell = quay.name.clone();
    let validation = sticky_validation(entries, &format!("quayName-{index}"), || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

pub(crate) fn apply_length(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    element_mut(&mut next.quays, index)?.length = text.to_string();
    let owned = text.to_string();
    let validation = sticky_validation(entries, &format!("quayLength-{index}"), || {
        rules::required_scalar_message(&owned, ctx.translator)
    });
    Ok((next, validation))
}

pub(crate) fn apply_extra_info(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    let lang = ctx.require_lang()?;
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let quay = element_mut(&mut next.quays, index)?;
    quay.extra_info.set(lang, text);
    let cell = quay.extra_info.clone();
    let validation = sticky_validation(entries, &format!("quayExtraInfo-{index}"), || {
        rules::localized_flag_message(&cell, ctx.translator)
    });
    Ok((next, validation))
}

pub(crate) fn apply_lat(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    apply_coordinate(state, value, entries, ctx, "quayLat", |quay| &mut quay.lat)
}

pub(crate) fn apply_lon(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    apply_coordinate(state, value, entries, ctx, "quayLon", |quay| &mut quay.lon)
}

/// Quay coordinate write: sticky required on the field key, then the
/// unconditional duplicate-location recompute on top
fn apply_coordinate(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
    base: &str,
    select: impl Fn(&mut Quay) -> &mut String,
) -> Step<HarborDraft> {
    let index = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    *select(element_mut(&mut next.quays, index)?) = text.to_string();
    let owned = text.to_string();
    let with_sticky = sticky_validation(entries, &format!("{base}-{index}"), || {
        rules::required_scalar_message(&owned, ctx.translator)
    })
    .unwrap_or_else(|| entries.to_vec());
    let validation = replace_entry(
        &with_sticky,
        &format!("quayLocation-{index}"),
        quay_location_message(&next, index, ctx),
    );
    Ok((next, Some(validation)))
}

fn quay_location_message(next: &HarborDraft, index: usize, ctx: &EditContext<'_>) -> String {
    let pairs: Vec<Option<(String, String)>> = next
        .quays
        .iter()
        .map(|quay| rules::coordinate_pair(&quay.lat, &quay.lon))
        .collect();
    if rules::is_duplicate_location(index, &pairs) {
        ctx.translator.translate(MessageKey::DuplicateLocation)
    } else {
        String::new()
    }
}

pub(crate) fn apply_section_toggle(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    let mut next = state.clone();
    match nested_collection_op(value, ctx)? {
        NestedOp::Append { outer } => {
            element_mut(&mut next.quays, outer)?
                .sections
                .push(Section::default());
            Ok((next, None))
        }
        NestedOp::Remove { outer, inner } => {
            let quay = element_mut(&mut next.quays, outer)?;
            checked_remove(&mut quay.sections, inner)?;
            let renumbered = renumber_inner_after_remove(entries, "sectionGeometry", outer, inner);
            let mut renumbered =
                renumber_inner_after_remove(&renumbered, "sectionLocation", outer, inner);
            if next.quays[outer].sections.get(inner).is_some() {
                renumbered.push(ValidationEntry::new(
                    format!("sectionLocation-{outer}-{inner}"),
                    section_location_message(&next, outer, inner, ctx),
                ));
            }
            Ok((next, Some(renumbered)))
        }
    }
}

pub(crate) fn apply_section_depth(
    state: &HarborDraft,
    value: &FieldValue,
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    let outer = ctx.require_outer_target()?;
    let inner = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let quay = element_mut(&mut next.quays, outer)?;
    element_mut(&mut quay.sections, inner)?.depth = text.to_string();
    Ok((next, None))
}

pub(crate) fn apply_section_lat(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    apply_section_coordinate(state, value, entries, ctx, |section| &mut section.lat)
}

pub(crate) fn apply_section_lon(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
) -> Step<HarborDraft> {
    apply_section_coordinate(state, value, entries, ctx, |section| &mut section.lon)
}

/// Section coordinate write: sticky geometry flag on the element key,
/// then the unconditional duplicate-location recompute on top
fn apply_section_coordinate(
    state: &HarborDraft,
    value: &FieldValue,
    entries: &[ValidationEntry],
    ctx: &EditContext<'_>,
    select: impl Fn(&mut Section) -> &mut String,
) -> Step<HarborDraft> {
    let outer = ctx.require_outer_target()?;
    let inner = ctx.require_target()?;
    let text = text_value(value)?;
    let mut next = state.clone();
    let quay = element_mut(&mut next.quays, outer)?;
    *select(element_mut(&mut quay.sections, inner)?) = text.to_string();

    let section = &next.quays[outer].sections[inner];
    let geometry_missing = rules::coordinate_pair(&section.lat, &section.lon).is_none();
    let with_sticky = sticky_validation(entries, &format!("sectionGeometry-{outer}-{inner}"), || {
        if geometry_missing {
            ctx.translator.translate(MessageKey::Required)
        } else {
            String::new()
        }
    })
    .unwrap_or_else(|| entries.to_vec());
    let validation = replace_entry(
        &with_sticky,
        &format!("sectionLocation-{outer}-{inner}"),
        section_location_message(&next, outer, inner, ctx),
    );
    Ok((next, Some(validation)))
}

fn section_location_message(
    next: &HarborDraft,
    outer: usize,
    inner: usize,
    ctx: &EditContext<'_>,
) -> String {
    let pairs: Vec<Option<(String, String)>> = next.quays[outer]
        .sections
        .iter()
        .map(|section| rules::coordinate_pair(&section.lat, &section.lon))
        .collect();
    if rules::is_duplicate_location(inner, &pairs) {
        ctx.translator.translate(MessageKey::DuplicateLocation)
    } else {
        String::new()
    }
}
