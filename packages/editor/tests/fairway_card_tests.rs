//! Fairway card reducer tests: field edits, collection toggles and the
//! entry-list renumbering that keeps validation aligned with positions

use fairway_editor::{
    reduce_fairway_card, EditContext, EditOutcome, EditResult, FairwayCardAction, FieldValue,
    GroupSequenceSorter, IgnoreReason,
};
use fairway_model::{FairwayCardDraft, Lang, Picture, TemporaryNotification, Vhf, Vts};
use fairway_validation::{KeyTranslator, ValidationEntry};

fn ctx<'a>() -> EditContext<'a> {
    EditContext::new(&KeyTranslator, &GroupSequenceSorter)
}

fn entry(key: &str, message: &str) -> ValidationEntry {
    ValidationEntry::new(key, message)
}

/// Run one edit, folding the recomputed entry list back into `errors`
fn reduce(
    draft: &FairwayCardDraft,
    value: FieldValue,
    action: FairwayCardAction,
    errors: &mut Vec<ValidationEntry>,
    ctx: &EditContext<'_>,
) -> EditResult<FairwayCardDraft> {
    let mut recomputed = None;
    let result = reduce_fairway_card(
        draft,
        &value,
        action,
        errors,
        &mut |entries| recomputed = Some(entries),
        ctx,
    );
    if let Some(entries) = recomputed {
        *errors = entries;
    }
    result
}

fn card_with_vts(count: usize) -> FairwayCardDraft {
    let mut draft = FairwayCardDraft::default();
    draft.traffic_service.vts = (0..count).map(|_| Vts::default()).collect();
    draft
}

#[test]
fn test_localized_write_fills_untouched_languages() {
    let draft = FairwayCardDraft::default();
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("Norra farleden".into()),
        FairwayCardAction::Name,
        &mut errors,
        &ctx().lang(Lang::Sv),
    );

    assert!(result.outcome.is_applied());
    assert_eq!(result.state.name.sv, "Norra farleden");
    assert_eq!(result.state.name.fi, "");
    assert_eq!(result.state.name.en, "");
}

#[test]
fn test_localized_write_preserves_other_languages() {
    let mut draft = FairwayCardDraft::default();
    draft.name.fi = "Pohjoinen väylä".to_string();
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("Northern fairway".into()),
        FairwayCardAction::Name,
        &mut errors,
        &ctx().lang(Lang::En),
    );

    assert_eq!(result.state.name.fi, "Pohjoinen väylä");
    assert_eq!(result.state.name.en, "Northern fairway");
}

#[test]
fn test_missing_lang_is_a_no_op() {
    let draft = FairwayCardDraft::default();
    let mut errors = vec![entry("line", "dummy")];
    let before = errors.clone();

    let result = reduce(
        &draft,
        FieldValue::Text("text".into()),
        FairwayCardAction::LineText,
        &mut errors,
        &ctx(),
    );

    assert_eq!(result.outcome, EditOutcome::Ignored(IgnoreReason::MissingLang));
    assert_eq!(result.state, draft);
    assert_eq!(errors, before);
}

#[test]
fn test_missing_target_is_a_no_op() {
    let draft = card_with_vts(1);
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("Bothnia VTS".into()),
        FairwayCardAction::VtsName,
        &mut errors,
        &ctx().lang(Lang::Fi),
    );

    assert_eq!(
        result.outcome,
        EditOutcome::Ignored(IgnoreReason::MissingTarget)
    );
    assert_eq!(result.state, draft);
    assert!(errors.is_empty());
}

#[test]
fn test_out_of_bounds_target_is_a_no_op() {
    let draft = card_with_vts(1);
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("Bothnia VTS".into()),
        FairwayCardAction::VtsName,
        &mut errors,
        &ctx().lang(Lang::Fi).target(5),
    );

    assert_eq!(
        result.outcome,
        EditOutcome::Ignored(IgnoreReason::TargetOutOfBounds)
    );
    assert_eq!(result.state, draft);
}

#[test]
fn test_value_shape_mismatch_is_a_no_op() {
    let draft = FairwayCardDraft::default();
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("not a list".into()),
        FairwayCardAction::FairwayIds,
        &mut errors,
        &ctx(),
    );

    assert_eq!(result.outcome, EditOutcome::Ignored(IgnoreReason::ValueShape));
    assert_eq!(result.state, draft);
}

#[test]
fn test_sticky_line_clears_when_all_variants_empty() {
    let draft = FairwayCardDraft::default();
    let mut errors = vec![entry("line", "dummy")];

    reduce(
        &draft,
        FieldValue::Text("".into()),
        FairwayCardAction::LineText,
        &mut errors,
        &ctx().lang(Lang::Fi),
    );

    assert_eq!(errors, vec![entry("line", "")]);
}

#[test]
fn test_sticky_line_flags_when_some_variant_has_content() {
    let mut draft = FairwayCardDraft::default();
    draft.line_text.sv = "linjetext".to_string();
    let mut errors = vec![entry("line", "dummy")];

    reduce(
        &draft,
        FieldValue::Text("".into()),
        FairwayCardAction::LineText,
        &mut errors,
        &ctx().lang(Lang::Fi),
    );

    assert_eq!(errors, vec![entry("line", "required")]);
}

#[test]
fn test_sticky_rule_skips_never_flagged_fields() {
    let draft = FairwayCardDraft::default();
    let mut errors = vec![entry("name", "required")];
    let before = errors.clone();

    reduce(
        &draft,
        FieldValue::Text("teksti".into()),
        FairwayCardAction::LineText,
        &mut errors,
        &ctx().lang(Lang::Fi),
    );

    // line was never flagged, so the entry list is untouched
    assert_eq!(errors, before);
}

#[test]
fn test_primary_id_uniqueness_against_reserved_ids() {
    let draft = FairwayCardDraft::default();
    let reserved = vec!["kvarken".to_string()];
    let mut errors = vec![entry("primaryId", "dummy")];

    reduce(
        &draft,
        FieldValue::Text("kvarken".into()),
        FairwayCardAction::PrimaryId,
        &mut errors,
        &ctx().reserved_ids(&reserved),
    );
    assert_eq!(errors, vec![entry("primaryId", "duplicateId")]);

    reduce(
        &draft,
        FieldValue::Text("uto".into()),
        FairwayCardAction::PrimaryId,
        &mut errors,
        &ctx().reserved_ids(&reserved),
    );
    assert_eq!(errors, vec![entry("primaryId", "")]);
}

#[test]
fn test_exclusive_fairway_selection_mirrors_into_designations() {
    let draft = FairwayCardDraft::default();
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::NumberList(vec![42]),
        FairwayCardAction::FairwayIds,
        &mut errors,
        &ctx(),
    );

    assert_eq!(result.state.fairway_ids, vec![42]);
    assert_eq!(result.state.primary_fairway_id, vec![42]);
    assert_eq!(result.state.secondary_fairway_id, vec![42]);
}

#[test]
fn test_multi_fairway_selection_leaves_designations_alone() {
    let mut draft = FairwayCardDraft::default();
    draft.primary_fairway_id = vec![7];
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::NumberList(vec![1, 2]),
        FairwayCardAction::FairwayIds,
        &mut errors,
        &ctx(),
    );

    assert_eq!(result.state.fairway_ids, vec![1, 2]);
    assert_eq!(result.state.primary_fairway_id, vec![7]);
}

#[test]
fn test_append_vts_is_error_neutral() {
    let draft = card_with_vts(2);
    let mut errors = vec![entry("vtsName-0", "required"), entry("group", "required")];
    let before = errors.clone();

    let result = reduce(
        &draft,
        FieldValue::Flag(true),
        FairwayCardAction::Vts,
        &mut errors,
        &ctx(),
    );

    assert_eq!(result.state.traffic_service.vts.len(), 3);
    assert_eq!(errors, before);
}

#[test]
fn test_remove_vts_renumbers_name_entries() {
    let draft = card_with_vts(3);
    let mut errors = vec![
        entry("vtsName-0", "m0"),
        entry("vtsName-1", "m1"),
        entry("vtsName-2", "m2"),
    ];

    let result = reduce(
        &draft,
        FieldValue::Flag(false),
        FairwayCardAction::Vts,
        &mut errors,
        &ctx().target(1),
    );

    assert_eq!(result.state.traffic_service.vts.len(), 2);
    assert_eq!(errors, vec![entry("vtsName-0", "m0"), entry("vtsName-1", "m2")]);
}

#[test]
fn test_remove_vts_rewrites_outer_component_of_channel_entries() {
    let mut draft = card_with_vts(3);
    for vts in &mut draft.traffic_service.vts {
        vts.vhf = vec![Vhf::default(), Vhf::default(), Vhf::default(), Vhf::default()];
    }
    let mut errors = vec![
        entry("vhfName-0-1", "keep"),
        entry("vhfChannel-1-0", "drop"),
        entry("vhfName-2-3", "shift"),
    ];

    reduce(
        &draft,
        FieldValue::Flag(false),
        FairwayCardAction::Vts,
        &mut errors,
        &ctx().target(1),
    );

    assert_eq!(
        errors,
        vec![entry("vhfName-0-1", "keep"), entry("vhfName-1-3", "shift")]
    );
}

#[test]
fn test_remove_vhf_renumbers_within_one_center_only() {
    let mut draft = card_with_vts(2);
    draft.traffic_service.vts[0].vhf = vec![Vhf::default(), Vhf::default(), Vhf::default()];
    draft.traffic_service.vts[1].vhf = vec![Vhf::default()];
    let mut errors = vec![
        entry("vhfChannel-0-0", "a"),
        entry("vhfChannel-0-1", "b"),
        entry("vhfChannel-0-2", "c"),
        entry("vhfChannel-1-0", "d"),
    ];

    let result = reduce(
        &draft,
        FieldValue::Flag(false),
        FairwayCardAction::Vhf,
        &mut errors,
        &ctx().outer_target(0).target(1),
    );

    assert_eq!(result.state.traffic_service.vts[0].vhf.len(), 2);
    assert_eq!(
        errors,
        vec![
            entry("vhfChannel-0-0", "a"),
            entry("vhfChannel-0-1", "c"),
            entry("vhfChannel-1-0", "d"),
        ]
    );
}

#[test]
fn test_nested_remove_requires_both_indices() {
    let draft = card_with_vts(1);
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Flag(false),
        FairwayCardAction::Vhf,
        &mut errors,
        &ctx().outer_target(0),
    );

    assert_eq!(
        result.outcome,
        EditOutcome::Ignored(IgnoreReason::MissingTarget)
    );
    assert_eq!(result.state, draft);
}

#[test]
fn test_vts_element_update_preserves_siblings() {
    let mut draft = card_with_vts(2);
    draft.traffic_service.vts[0].phone_number = "+358401".to_string();
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("+358402".into()),
        FairwayCardAction::VtsPhone,
        &mut errors,
        &ctx().target(1),
    );

    assert_eq!(result.state.traffic_service.vts[0], draft.traffic_service.vts[0]);
    assert_eq!(result.state.traffic_service.vts[1].phone_number, "+358402");
}

#[test]
fn test_start_date_messages() {
    let mut draft = FairwayCardDraft::default();
    draft.temporary_notifications.push(TemporaryNotification::default());
    let mut errors = Vec::new();

    reduce(
        &draft,
        FieldValue::Text("".into()),
        FairwayCardAction::TemporaryNotificationStartDate,
        &mut errors,
        &ctx().target(0),
    );
    assert_eq!(
        errors,
        vec![
            entry("temporaryNotificationStartDate-0", "required"),
            entry("temporaryNotificationEndDate-0", ""),
        ]
    );

    reduce(
        &draft,
        FieldValue::Text("99999999".into()),
        FairwayCardAction::TemporaryNotificationStartDate,
        &mut errors,
        &ctx().target(0),
    );
    assert_eq!(errors[0], entry("temporaryNotificationStartDate-0", "invalid"));
}

#[test]
fn test_end_date_before_start_date() {
    let mut draft = FairwayCardDraft::default();
    draft.temporary_notifications.push(TemporaryNotification {
        start_date: "02022002".to_string(),
        ..TemporaryNotification::default()
    });
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("01011900".into()),
        FairwayCardAction::TemporaryNotificationEndDate,
        &mut errors,
        &ctx().target(0),
    );

    assert_eq!(
        errors
            .iter()
            .find(|e| e.path_key == "temporaryNotificationEndDate-0")
            .map(|e| e.message.as_str()),
        Some("endDateError")
    );

    // an unparsable end date reports invalid instead of the ordering error
    reduce(
        &result.state,
        FieldValue::Text("1.13.2002".into()),
        FairwayCardAction::TemporaryNotificationEndDate,
        &mut errors,
        &ctx().target(0),
    );
    assert_eq!(
        errors
            .iter()
            .find(|e| e.path_key == "temporaryNotificationEndDate-0")
            .map(|e| e.message.as_str()),
        Some("invalid")
    );
}

#[test]
fn test_notification_remove_appends_duplicate_entries_for_slid_element() {
    let mut draft = FairwayCardDraft::default();
    draft.temporary_notifications = vec![
        TemporaryNotification::default(),
        TemporaryNotification {
            start_date: "01011900".to_string(),
            ..TemporaryNotification::default()
        },
    ];
    let mut errors = vec![entry("temporaryNotificationStartDate-1", "invalid")];

    let result = reduce(
        &draft,
        FieldValue::Flag(false),
        FairwayCardAction::TemporaryNotifications,
        &mut errors,
        &ctx().target(0),
    );

    assert_eq!(result.state.temporary_notifications.len(), 1);
    // the renumbered carried entry and the recomputed one coexist,
    // same path key at fixed offsets
    assert_eq!(
        errors,
        vec![
            entry("temporaryNotificationStartDate-0", "invalid"),
            entry("temporaryNotificationStartDate-0", ""),
            entry("temporaryNotificationEndDate-0", ""),
        ]
    );
}

#[test]
fn test_remove_last_notification_appends_nothing() {
    let mut draft = FairwayCardDraft::default();
    draft.temporary_notifications.push(TemporaryNotification::default());
    let mut errors = vec![entry("temporaryNotificationStartDate-0", "required")];

    reduce(
        &draft,
        FieldValue::Flag(false),
        FairwayCardAction::TemporaryNotifications,
        &mut errors,
        &ctx().target(0),
    );

    assert!(errors.is_empty());
}

#[test]
fn test_pictures_are_sorted_on_replacement() {
    let draft = FairwayCardDraft::default();
    let mut errors = Vec::new();
    let picture = |id: &str, group_id: i64, sequence_number: i64| Picture {
        id: id.to_string(),
        group_id,
        sequence_number,
        ..Picture::default()
    };

    let result = reduce(
        &draft,
        FieldValue::Pictures(vec![
            picture("c", 2, 1),
            picture("a", 1, 2),
            picture("b", 1, 1),
        ]),
        FairwayCardAction::Pictures,
        &mut errors,
        &ctx(),
    );

    let order: Vec<&str> = result.state.pictures.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test]
fn test_status_parses_wire_form() {
    let draft = FairwayCardDraft::default();
    let mut errors = Vec::new();

    let result = reduce(
        &draft,
        FieldValue::Text("PUBLIC".into()),
        FairwayCardAction::Status,
        &mut errors,
        &ctx(),
    );
    assert!(result.outcome.is_applied());

    let result = reduce(
        &draft,
        FieldValue::Text("published".into()),
        FairwayCardAction::Status,
        &mut errors,
        &ctx(),
    );
    assert_eq!(result.outcome, EditOutcome::Ignored(IgnoreReason::ValueShape));
}
