//! # Engine API
//!
//! Capability traits for the editor engine.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the engine's instance registry is an
//!   injected capability (`init`/`remove`/`get`), never a hidden global
//! - **Testability first**: everything the lifecycle controller needs from
//!   an engine fits behind these traits, so a simulated engine can stand in
//! - **Opaque configuration**: the bridge reads only `inline`, rewrites
//!   only `selector` and `setup`; every other key passes through untouched
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An editor implementation (no document model, no DOM, no undo)
//! - A validation layer for configuration semantics

use editor_types::{EditorId, EventPayload};
use serde_json::{Map, Value};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Event name the engine fires on an instance once it is ready
///
/// Content supplied at init time must never be pushed before this fires;
/// the underlying document may not exist yet.
pub const READY_EVENT: &str = "init";

/// Shared handle to a live editor instance
pub type InstanceRef = Rc<dyn EditorInstance>;

/// Callback invoked when a subscribed native event fires
///
/// The instance handle is passed explicitly because native event payloads
/// do not carry a reference to the editor.
pub type EventCallback = Rc<dyn Fn(&EventPayload, &InstanceRef)>;

/// Setup callback run by the engine against a freshly created instance,
/// before the instance is ready
pub type SetupFn = Box<dyn FnOnce(&InstanceRef)>;

/// Caller-shared setup callback as it appears in `EditorConfig`
pub type SetupShared = Rc<dyn Fn(&InstanceRef)>;

/// Engine error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("editor instance not found: {0}")]
    InstanceNotFound(EditorId),

    #[error("editor instance already exists: {0}")]
    InstanceAlreadyExists(EditorId),

    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),

    #[error("engine initialization failed: {0}")]
    InitFailed(String),
}

/// Caller-owned editor configuration
///
/// This is the declarative configuration handed down through props. The
/// bridge clones it before augmenting, so the caller's copy is never
/// mutated. Equality covers the declarative fields only; setup callbacks
/// have no structural identity.
#[derive(Clone, Default)]
pub struct EditorConfig {
    /// Inline editing mode (switches the container render variant)
    pub inline: bool,
    /// Opaque configuration keys, passed through to the engine untouched
    pub options: Map<String, Value>,
    /// Caller-supplied setup callback, still run after the bridge's own
    /// wiring when the engine initializes
    pub setup: Option<SetupShared>,
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches inline editing mode
    pub fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Adds an opaque configuration key
    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Sets the caller's setup callback
    pub fn with_setup(mut self, setup: SetupShared) -> Self {
        self.setup = Some(setup);
        self
    }
}

impl PartialEq for EditorConfig {
    fn eq(&self, other: &Self) -> bool {
        self.inline == other.inline && self.options == other.options
    }
}

impl fmt::Debug for EditorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorConfig")
            .field("inline", &self.inline)
            .field("options", &self.options)
            .field("setup", &self.setup.is_some())
            .finish()
    }
}

/// Augmented configuration handed to one `init` call
///
/// Built by the lifecycle controller from a cloned `EditorConfig`:
/// `selector` is injected from the identity and `setup` is the bridge's
/// wrapper around the caller's callback. Each init builds a fresh one.
pub struct EngineConfig {
    /// Container selector, always `"#" + identity`
    pub selector: String,
    /// Inline editing mode
    pub inline: bool,
    /// Opaque configuration keys
    pub options: Map<String, Value>,
    /// One-shot setup run against the new instance
    pub setup: Option<SetupFn>,
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("selector", &self.selector)
            .field("inline", &self.inline)
            .field("options", &self.options)
            .field("setup", &self.setup.is_some())
            .finish()
    }
}

impl EngineConfig {
    /// Parses the instance identity out of the selector
    ///
    /// Engines key instances by the element id, so only id selectors are
    /// meaningful here.
    pub fn identity(&self) -> Result<EditorId, EngineError> {
        match self.selector.strip_prefix('#') {
            Some(id) if !id.is_empty() => Ok(EditorId::new(id)),
            _ => Err(EngineError::InvalidSelector(self.selector.clone())),
        }
    }
}

/// A live editor instance
///
/// Instances are single-threaded shared handles; the engine owns the
/// backing state and hands out `InstanceRef`s.
pub trait EditorInstance {
    /// Identity this instance is keyed by
    fn id(&self) -> &EditorId;

    /// Whether the engine has fired the readiness event for this instance
    fn is_ready(&self) -> bool;

    /// Subscribes a callback to a native event on this instance
    fn on(&self, event: &str, callback: EventCallback);

    /// Replaces the document content
    fn set_content(&self, content: &str);

    /// Returns the current document content
    fn content(&self) -> String;

    /// Selects the document body and collapses the selection to its end
    fn select_body_end(&self);
}

/// The editor engine capability set
///
/// `init` creates an instance keyed by the identity in the configuration's
/// selector, runs the setup callback against it, and fires [`READY_EVENT`]
/// on the instance at some later point. `remove` with `force` bypasses any
/// confirmation semantics and tolerates an already-missing instance.
pub trait EditorEngine {
    fn init(&mut self, config: EngineConfig) -> Result<InstanceRef, EngineError>;

    fn remove(&mut self, id: &EditorId, force: bool) -> Result<(), EngineError>;

    fn get(&self, id: &EditorId) -> Option<InstanceRef>;
}
