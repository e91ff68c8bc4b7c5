//! Golden contract tests for the event catalog.
//!
//! The catalog order and the derived prop names are positional contracts;
//! these tests fail if either drifts.

use event_map::{catalog, event_table};

#[test]
fn catalog_has_sixty_three_entries_in_known_order() {
    let events = catalog();
    assert_eq!(events.len(), 63);
    assert_eq!(events[0], "focusin");
    assert_eq!(events[11], "copy");
    assert_eq!(events[26], "BeforeRenderUI");
    assert_eq!(events[30], "init");
    assert_eq!(events[33], "NodeChange");
    assert_eq!(events[62], "dirty");
}

#[test]
fn derived_prop_names_are_stable() {
    let table = event_table();
    let expectations = [
        ("focusin", "onFocusin"),
        ("dblclick", "onDblclick"),
        ("mouseleave", "onMouseleave"),
        ("BeforeRenderUI", "onBeforeRenderUI"),
        ("init", "onInit"),
        ("NodeChange", "onNodeChange"),
        ("BeforeExecCommand", "onBeforeExecCommand"),
        ("ClearUndos", "onClearUndos"),
        ("dirty", "onDirty"),
    ];
    for (event, prop) in expectations {
        assert_eq!(table.callback_name_for(event), Some(prop), "event {event}");
    }
}

#[test]
fn every_derived_name_has_the_on_prefix_and_no_duplicates() {
    let table = event_table();
    let mut seen = std::collections::HashSet::new();
    for binding in table.bindings() {
        assert!(binding.callback_prop.starts_with("on"), "{binding:?}");
        assert!(
            binding.callback_prop.len() > 2,
            "empty derived name: {binding:?}"
        );
        assert!(seen.insert(binding.callback_prop.clone()), "{binding:?}");
    }
    assert_eq!(seen.len(), 63);
}
