//! # Event Map
//!
//! Static mapping from the native editor event catalog to callback-prop
//! names, plus the wiring that subscribes caller callbacks on a fresh
//! instance.
//!
//! ## Philosophy
//!
//! - **One table, built once**: every component instance shares the same
//!   immutable event-to-prop-name table
//! - **Positional, ordered**: the catalog order is the contract; derived
//!   names are zipped against it and must never be reordered
//! - **Absent means skip**: a callback prop the caller did not supply is
//!   silently skipped, never an error

use engine_api::{EventCallback, InstanceRef};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Native DOM and custom events the engine can fire on an instance.
///
/// Verbatim catalog, in source order. The capitalization is inconsistent
/// (`mouseleave` vs `NodeChange`), so the derived prop names are
/// inconsistently named too (`onMouseleave` vs `onNodeChange`). That is
/// deliberate and must not be normalized, or the derived names diverge
/// from what callers wired up.
pub const EVENTS: [&str; 63] = [
    "focusin",
    "focusout",
    "click",
    "dblclick",
    "mousedown",
    "mouseup",
    "mousemove",
    "mouseover",
    "beforepaste",
    "paste",
    "cut",
    "copy",
    "selectionchange",
    "mouseout",
    "mouseenter",
    "mouseleave",
    "keydown",
    "keypress",
    "keyup",
    "contextmenu",
    "dragend",
    "dragover",
    "draggesture",
    "dragdrop",
    "drop",
    "drag",
    "BeforeRenderUI",
    "SetAttrib",
    "PreInit",
    "PostRender",
    "init",
    "deactivate",
    "activate",
    "NodeChange",
    "BeforeExecCommand",
    "ExecCommand",
    "show",
    "hide",
    "ProgressState",
    "LoadContent",
    "SaveContent",
    "BeforeSetContent",
    "SetContent",
    "BeforeGetContent",
    "GetContent",
    "VisualAid",
    "remove",
    "submit",
    "reset",
    "BeforeAddUndo",
    "AddUndo",
    "change",
    "undo",
    "redo",
    "ClearUndos",
    "ObjectSelected",
    "ObjectResizeStart",
    "ObjectResized",
    "PreProcess",
    "PostProcess",
    "focus",
    "blur",
    "dirty",
];

/// Returns the native event catalog in its stable order
pub fn catalog() -> &'static [&'static str] {
    &EVENTS
}

/// Uppercases the first character, leaving the rest untouched
fn uc_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// One catalog entry paired with its derived callback-prop name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    /// Native event name
    pub event: &'static str,
    /// Derived callback-prop name (`"on" + uc_first(event)`)
    pub callback_prop: String,
}

/// The immutable event-to-prop-name table
///
/// Built once per process; see [`event_table`].
pub struct EventTable {
    bindings: Vec<EventBinding>,
}

impl EventTable {
    fn build() -> Self {
        let bindings = EVENTS
            .iter()
            .map(|&event| EventBinding {
                event,
                callback_prop: format!("on{}", uc_first(event)),
            })
            .collect();
        Self { bindings }
    }

    /// Returns the bindings in catalog order
    pub fn bindings(&self) -> &[EventBinding] {
        &self.bindings
    }

    /// Returns the derived callback-prop name for a catalog event
    pub fn callback_name_for(&self, event: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|binding| binding.event == event)
            .map(|binding| binding.callback_prop.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Returns the process-wide event table, building it on first use
pub fn event_table() -> &'static EventTable {
    static TABLE: OnceLock<EventTable> = OnceLock::new();
    TABLE.get_or_init(EventTable::build)
}

/// Lookup capability for caller-supplied callback props
///
/// The props object is treated as a plain key-value record at this
/// boundary: the adapter asks for each derived prop name and gets back an
/// optional callback. `None` is the documented skip.
pub trait CallbackLookup {
    fn callback(&self, prop_name: &str) -> Option<EventCallback>;
}

impl CallbackLookup for HashMap<String, EventCallback> {
    fn callback(&self, prop_name: &str) -> Option<EventCallback> {
        self.get(prop_name).cloned()
    }
}

/// Subscribes every supplied callback prop on a fresh instance
///
/// For each catalog entry, the corresponding callback (if any) is
/// subscribed so the instance dispatch invokes it with
/// `(payload, handle)`. Absent entries are skipped.
pub fn bind_all(instance: &InstanceRef, lookup: &dyn CallbackLookup) {
    for binding in event_table().bindings() {
        if let Some(callback) = lookup.callback(&binding.callback_prop) {
            instance.on(binding.event, callback);
        }
    }
}
