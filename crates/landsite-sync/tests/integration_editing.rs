//! Integration tests for the form editing flow
//!
//! Loads documents into binders, drives repeatable-group edits, and
//! checks what a submit actually persists.

mod common;

use common::*;
use landsite_core::{DocumentKind, LocalIdSource};
use landsite_form::{FormBinder, GroupController, ReconcileOutcome, Reconciler};
use landsite_store::starter_document;
use landsite_sync::SubmitOutcome;
use proptest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_append_then_remove_first_keeps_appended_position() {
    init_test_logging();

    let harness = EditingHarness::new();
    harness
        .api
        .seed([DocumentFixtures::home_with_one_value_proposition()]);

    let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));
    let outcome = harness
        .loader()
        .load_into(&mut binder, &Reconciler::default())
        .await
        .unwrap();
    assert_eq!(outcome, ReconcileOutcome::Reset);

    let groups = GroupController::for_field("value_propositions");
    let ids = LocalIdSource::new();
    groups
        .append(
            &mut binder,
            &ids,
            json!({
                "title": "Fast",
                "icon": "Zap",
                "description": "Quick delivery"
            }),
        )
        .unwrap();
    assert_eq!(groups.len(&binder), 2);
    assert_eq!(groups.position_at(&binder, 1), Some(2));

    let removed = groups.remove_at(&mut binder, 0).unwrap();
    assert_eq!(removed["title"], json!("Local knowledge"));

    // The survivor keeps the position it was appended with.
    let pipeline = harness.pipeline(DocumentKind::Home);
    let outcome = pipeline.submit(&mut binder).await;
    let SubmitOutcome::Saved(saved) = outcome else {
        panic!("expected the edit to save, got {outcome:?}");
    };

    assert_eq!(titles(&saved.fields, "value_propositions", "title"), ["Fast"]);
    assert_eq!(positions(&saved.fields, "value_propositions"), [2]);
    assert_eq!(
        harness.store.page(DocumentKind::Home).unwrap().fields,
        saved.fields
    );
}

#[tokio::test]
async fn test_bad_logo_url_stops_submit_before_the_network() {
    init_test_logging();

    let harness = EditingHarness::seeded();
    let mut binder = FormBinder::seeded(DocumentKind::SiteSettings, json!({}));
    harness
        .loader()
        .load_into(&mut binder, &Reconciler::default())
        .await
        .unwrap();

    binder.set(&path("logo.url"), json!("not-a-url")).unwrap();

    let pipeline = harness.pipeline(DocumentKind::SiteSettings);
    let outcome = pipeline.submit(&mut binder).await;

    let SubmitOutcome::Invalid(report) = outcome else {
        panic!("expected a validation failure, got {outcome:?}");
    };
    assert_eq!(
        report.message(&path("logo.url")),
        Some("Must be a valid URL")
    );
    assert_eq!(harness.api.update_calls(), 0);
    assert_eq!(harness.api.create_calls(), 0);
    assert!(harness.activity.is_empty());
}

#[test]
fn test_move_round_trip_restores_order() {
    init_test_logging();

    let document = starter_document(DocumentKind::Home);
    let mut binder = FormBinder::for_document(&document);
    let groups = GroupController::for_field("value_propositions");

    let before = titles(binder.fields(), "value_propositions", "title");
    assert_eq!(before.len(), 3);

    assert!(groups.move_to(&mut binder, 2, 1).unwrap());
    assert_ne!(titles(binder.fields(), "value_propositions", "title"), before);

    assert!(groups.move_to(&mut binder, 1, 2).unwrap());
    assert_eq!(titles(binder.fields(), "value_propositions", "title"), before);
    assert_eq!(positions(binder.fields(), "value_propositions"), [1, 2, 3]);
}

#[test]
fn test_moves_at_the_edges_are_quiet_no_ops() {
    init_test_logging();

    let document = starter_document(DocumentKind::Home);
    let mut binder = FormBinder::for_document(&document);
    let groups = GroupController::for_field("value_propositions");
    let before = binder.snapshot();

    assert!(!groups.move_up(&mut binder, 0).unwrap());
    assert!(!groups.move_down(&mut binder, 2).unwrap());
    assert_eq!(binder.snapshot(), before);
}

#[test]
fn test_removal_keeps_positions_until_renumber() {
    init_test_logging();

    let document = starter_document(DocumentKind::Home);
    let mut binder = FormBinder::for_document(&document);
    let groups = GroupController::for_field("value_propositions");

    groups.remove_at(&mut binder, 0).unwrap();
    assert_eq!(positions(binder.fields(), "value_propositions"), [2, 3]);

    let changed = groups.renumber(&mut binder).unwrap();
    assert_eq!(changed, 2);
    assert_eq!(positions(binder.fields(), "value_propositions"), [1, 2]);
}

#[test]
fn test_reset_makes_fields_deep_equal_to_document() {
    init_test_logging();

    let document = starter_document(DocumentKind::About);
    let mut binder = FormBinder::seeded(DocumentKind::About, json!({}));
    binder.set(&path("headline"), json!("Scratch copy")).unwrap();

    binder.reset(document.fields.clone());

    assert_eq!(binder.snapshot(), document.fields);
    assert!(!binder.is_dirty());
}

#[tokio::test]
async fn test_discard_after_load_returns_to_server_copy() {
    init_test_logging();

    let harness = EditingHarness::seeded();
    let mut binder = FormBinder::seeded(DocumentKind::About, json!({}));
    harness
        .loader()
        .load_into(&mut binder, &Reconciler::default())
        .await
        .unwrap();
    let loaded = binder.snapshot();

    binder.set(&path("headline"), json!("Changed my mind")).unwrap();
    binder.discard();

    assert_eq!(binder.snapshot(), loaded);
    assert!(!binder.is_dirty());
}

proptest! {
    #[test]
    fn prop_appended_groups_number_densely_with_unique_ids(
        entry_titles in proptest::collection::vec("[A-Za-z ]{1,12}", 1..6)
    ) {
        let mut binder = FormBinder::seeded(DocumentKind::Home, json!({}));
        let groups = GroupController::for_field("value_propositions");
        let ids = LocalIdSource::new();

        let mut local_ids = Vec::new();
        for title in &entry_titles {
            let id = groups
                .append(&mut binder, &ids, json!({"title": title, "description": "d"}))
                .unwrap();
            local_ids.push(id);
        }

        // Appends already number densely, so renumber has nothing to do.
        prop_assert_eq!(groups.renumber(&mut binder).unwrap(), 0);
        let expected: Vec<u64> = (1..=entry_titles.len() as u64).collect();
        prop_assert_eq!(positions(binder.fields(), "value_propositions"), expected);

        local_ids.sort();
        local_ids.dedup();
        prop_assert_eq!(local_ids.len(), entry_titles.len());
    }
}
