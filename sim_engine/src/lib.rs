//! # Simulated Engine
//!
//! Deterministic in-process editor engine for testing the bridge.
//!
//! ## Philosophy
//!
//! - **Nothing happens on its own**: readiness does not fire until a test
//!   fires it, so ordering guarantees can be asserted, not hoped for
//! - **Everything is recorded**: init and remove calls land in a call log
//!   so tests can pin exact call counts
//! - **Faults are injectable**: init failures are armed explicitly
//!
//! ## Non-Goals
//!
//! This is NOT an editor. There is no document model beyond a content
//! string and a one-bit selection state; just enough surface to observe
//! what the lifecycle controller does.

use editor_types::{EditorId, EventPayload};
use engine_api::{
    EditorEngine, EditorInstance, EngineConfig, EngineError, EventCallback, InstanceRef,
    READY_EVENT,
};
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Selection state of a simulated instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Selection untouched since the last content change
    #[default]
    Preserved,
    /// Body selected and collapsed to the end of the document
    CollapsedToEnd,
}

/// One recorded engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Init {
        id: EditorId,
        selector: String,
        inline: bool,
    },
    Remove {
        id: EditorId,
        force: bool,
    },
}

/// A simulated editor instance
///
/// Single-threaded shared state behind `Cell`/`RefCell`, handed out as
/// `Rc` both concretely (for test inspection) and as an `InstanceRef`.
pub struct SimInstance {
    id: EditorId,
    selector: String,
    inline: bool,
    options: Map<String, Value>,
    ready: Cell<bool>,
    content: RefCell<String>,
    content_set_count: Cell<usize>,
    selection: Cell<SelectionState>,
    subscribers: RefCell<HashMap<String, Vec<EventCallback>>>,
}

impl SimInstance {
    fn new(id: EditorId, selector: String, inline: bool, options: Map<String, Value>) -> Self {
        Self {
            id,
            selector,
            inline,
            options,
            ready: Cell::new(false),
            content: RefCell::new(String::new()),
            content_set_count: Cell::new(0),
            selection: Cell::new(SelectionState::Preserved),
            subscribers: RefCell::new(HashMap::new()),
        }
    }

    /// Selector this instance was initialized with
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Inline mode this instance was initialized with
    pub fn inline(&self) -> bool {
        self.inline
    }

    /// Opaque options as passed through by the bridge
    pub fn options(&self) -> &Map<String, Value> {
        &self.options
    }

    /// How many times content has been pushed into this instance
    pub fn content_set_count(&self) -> usize {
        self.content_set_count.get()
    }

    /// Current selection state
    pub fn selection(&self) -> SelectionState {
        self.selection.get()
    }

    /// Number of subscriptions registered for an event
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.subscribers
            .borrow()
            .get(event)
            .map_or(0, |callbacks| callbacks.len())
    }
}

impl EditorInstance for SimInstance {
    fn id(&self) -> &EditorId {
        &self.id
    }

    fn is_ready(&self) -> bool {
        self.ready.get()
    }

    fn on(&self, event: &str, callback: EventCallback) {
        self.subscribers
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push(callback);
    }

    fn set_content(&self, content: &str) {
        *self.content.borrow_mut() = content.to_string();
        self.content_set_count.set(self.content_set_count.get() + 1);
        self.selection.set(SelectionState::Preserved);
    }

    fn content(&self) -> String {
        self.content.borrow().clone()
    }

    fn select_body_end(&self) {
        self.selection.set(SelectionState::CollapsedToEnd);
    }
}

/// Dispatches an event on an instance, live or detached
///
/// Subscribers are snapshotted before dispatch so a callback may register
/// further subscriptions. Taking the instance directly (rather than an
/// identity looked up in an engine) lets tests replay a stale readiness
/// event against an instance the engine has already dropped.
pub fn fire_on(instance: &Rc<SimInstance>, event: &str, payload: &EventPayload) {
    let callbacks: Vec<EventCallback> = instance
        .subscribers
        .borrow()
        .get(event)
        .cloned()
        .unwrap_or_default();
    let handle: InstanceRef = Rc::clone(instance) as InstanceRef;
    for callback in callbacks {
        callback(payload, &handle);
    }
}

/// The simulated engine
///
/// Keeps the per-identity instance registry the real engine would keep
/// globally, plus the recorded call log and armed faults.
pub struct SimEngine {
    instances: HashMap<EditorId, Rc<SimInstance>>,
    call_log: Vec<EngineCall>,
    fail_next_init: Option<String>,
}

impl SimEngine {
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
            call_log: Vec::new(),
            fail_next_init: None,
        }
    }

    /// Arms a one-shot failure for the next `init` call
    pub fn fail_next_init(&mut self, reason: impl Into<String>) {
        self.fail_next_init = Some(reason.into());
    }

    /// Returns the concrete instance for test inspection
    pub fn get_sim(&self, id: &EditorId) -> Option<Rc<SimInstance>> {
        self.instances.get(id).cloned()
    }

    /// Recorded engine calls, oldest first
    pub fn call_log(&self) -> &[EngineCall] {
        &self.call_log
    }

    /// Number of recorded (successful) init calls
    pub fn init_count(&self) -> usize {
        self.call_log
            .iter()
            .filter(|call| matches!(call, EngineCall::Init { .. }))
            .count()
    }

    /// Number of live instances
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Marks an instance ready and fires the readiness event on it
    pub fn fire_ready(&mut self, id: &EditorId) -> Result<(), EngineError> {
        let instance = self
            .instances
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::InstanceNotFound(id.clone()))?;
        instance.ready.set(true);
        fire_on(&instance, READY_EVENT, &EventPayload::new(READY_EVENT));
        Ok(())
    }

    /// Fires an arbitrary native event on a live instance
    pub fn fire(
        &self,
        id: &EditorId,
        event: &str,
        payload: &EventPayload,
    ) -> Result<(), EngineError> {
        let instance = self
            .instances
            .get(id)
            .ok_or_else(|| EngineError::InstanceNotFound(id.clone()))?;
        fire_on(instance, event, payload);
        Ok(())
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorEngine for SimEngine {
    fn init(&mut self, config: EngineConfig) -> Result<InstanceRef, EngineError> {
        let id = config.identity()?;

        if self.instances.contains_key(&id) {
            return Err(EngineError::InstanceAlreadyExists(id));
        }
        if let Some(reason) = self.fail_next_init.take() {
            return Err(EngineError::InitFailed(reason));
        }

        let instance = Rc::new(SimInstance::new(
            id.clone(),
            config.selector.clone(),
            config.inline,
            config.options,
        ));
        self.instances.insert(id.clone(), Rc::clone(&instance));
        self.call_log.push(EngineCall::Init {
            id,
            selector: config.selector,
            inline: config.inline,
        });

        let handle: InstanceRef = Rc::clone(&instance) as InstanceRef;
        if let Some(setup) = config.setup {
            setup(&handle);
        }
        Ok(handle)
    }

    fn remove(&mut self, id: &EditorId, force: bool) -> Result<(), EngineError> {
        match self.instances.remove(id) {
            Some(instance) => {
                fire_on(&instance, "remove", &EventPayload::new("remove"));
                self.call_log.push(EngineCall::Remove {
                    id: id.clone(),
                    force,
                });
                Ok(())
            }
            None if force => {
                // mirrors forced removal of an unknown identity: a no-op
                self.call_log.push(EngineCall::Remove {
                    id: id.clone(),
                    force,
                });
                Ok(())
            }
            None => Err(EngineError::InstanceNotFound(id.clone())),
        }
    }

    fn get(&self, id: &EditorId) -> Option<InstanceRef> {
        self.instances
            .get(id)
            .map(|instance| Rc::clone(instance) as InstanceRef)
    }
}
