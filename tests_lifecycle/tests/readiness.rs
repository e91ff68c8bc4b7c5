//! Readiness-ordering scenarios.
//!
//! Content supplied at initialize time must never reach the instance
//! before the engine fires its readiness event, and a stale readiness
//! event from a previous instance generation must never write content.

use editor_host::EditorProps;
use editor_types::{EditorId, EventPayload};
use engine_api::{EditorInstance, READY_EVENT};
use sim_engine::{fire_on, SelectionState};
use tests_lifecycle::bootstrap;

#[test]
fn content_waits_for_readiness() {
    let (mut host, engine) = bootstrap();
    let props = EditorProps::new().with_id("e1").with_content("<p>hi</p>");
    host.on_mount(&props).unwrap();

    let id = EditorId::new("e1");
    let instance = engine.borrow().get_sim(&id).unwrap();

    // zero pushes before readiness
    assert_eq!(instance.content_set_count(), 0);
    assert_eq!(instance.content(), "");
    assert!(!host.is_initialized());

    engine.borrow_mut().fire_ready(&id).unwrap();

    // exactly one push after readiness
    assert_eq!(instance.content_set_count(), 1);
    assert_eq!(instance.content(), "<p>hi</p>");
    assert!(host.is_initialized());
    // the deferred push replaces content without collapsing the selection
    assert_eq!(instance.selection(), SelectionState::Preserved);
}

#[test]
fn refired_readiness_repushes_under_current_generation() {
    let (mut host, engine) = bootstrap();
    host.on_mount(&EditorProps::new().with_id("e1").with_content("<p>hi</p>"))
        .unwrap();

    let id = EditorId::new("e1");
    engine.borrow_mut().fire_ready(&id).unwrap();
    // an engine re-firing readiness re-pushes the same content; the
    // generation is still current so the push is legitimate
    engine
        .borrow()
        .fire(&id, READY_EVENT, &EventPayload::new(READY_EVENT))
        .unwrap();

    let instance = engine.borrow().get_sim(&id).unwrap();
    assert_eq!(instance.content(), "<p>hi</p>");
    assert_eq!(instance.content_set_count(), 2);
}

#[test]
fn empty_content_registers_no_deferred_push() {
    let (mut host, engine) = bootstrap();
    host.on_mount(&EditorProps::new().with_id("e1")).unwrap();

    let id = EditorId::new("e1");
    let instance = engine.borrow().get_sim(&id).unwrap();
    assert_eq!(instance.subscriber_count(READY_EVENT), 0);

    engine.borrow_mut().fire_ready(&id).unwrap();
    assert_eq!(instance.content_set_count(), 0);
    assert!(!host.is_initialized());
}

#[test]
fn stale_readiness_after_teardown_is_ignored() {
    let (mut host, engine) = bootstrap();
    host.on_mount(&EditorProps::new().with_id("e1").with_content("<p>hi</p>"))
        .unwrap();

    let id = EditorId::new("e1");
    let detached = engine.borrow().get_sim(&id).unwrap();
    host.on_unmount().unwrap();

    // the engine dropped the instance, but the readiness event was already
    // in flight; replay it against the retained handle
    fire_on(&detached, READY_EVENT, &EventPayload::new(READY_EVENT));

    assert_eq!(detached.content_set_count(), 0);
    assert!(!host.is_initialized());
}

#[test]
fn stale_readiness_after_reinit_cannot_cross_generations() {
    let (mut host, engine) = bootstrap();
    let prev = EditorProps::new().with_id("e1").with_content("<p>old</p>");
    host.on_mount(&prev).unwrap();

    let id = EditorId::new("e1");
    let stale = engine.borrow().get_sim(&id).unwrap();

    // config change re-initializes; a fresh instance replaces the old one
    let next = EditorProps::new()
        .with_id("e1")
        .with_content("<p>new</p>")
        .with_config(
            engine_api::EditorConfig::new().with_option("theme", serde_json::json!("modern")),
        );
    host.on_props_change(&prev, &next).unwrap();

    // the old instance's readiness arrives late: its generation is dead
    fire_on(&stale, READY_EVENT, &EventPayload::new(READY_EVENT));
    assert_eq!(stale.content_set_count(), 0);

    // the current generation still works
    engine.borrow_mut().fire_ready(&id).unwrap();
    let current = engine.borrow().get_sim(&id).unwrap();
    assert_eq!(current.content(), "<p>new</p>");
    assert_eq!(current.content_set_count(), 1);
}

#[test]
fn mount_example_from_contract() {
    // mount with config={}, content="<p>hi</p>", id="e1"
    let (mut host, engine) = bootstrap();
    host.on_mount(&EditorProps::new().with_id("e1").with_content("<p>hi</p>"))
        .unwrap();

    let id = EditorId::new("e1");
    let instance = engine.borrow().get_sim(&id).unwrap();
    assert_eq!(instance.selector(), "#e1");
    assert_eq!(engine.borrow().instance_count(), 1);

    engine.borrow_mut().fire_ready(&id).unwrap();
    assert_eq!(instance.content(), "<p>hi</p>");
}
