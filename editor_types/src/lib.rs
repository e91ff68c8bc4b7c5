//! # Editor Types
//!
//! Shared types for the editor bridge.
//!
//! ## Philosophy
//!
//! - **Identity is explicit**: every editor instance is keyed by an
//!   `EditorId`; at most one live instance exists per identity
//! - **The host renders values**: the bridge never touches a display, it
//!   hands the host a `ContainerSpec` describing the surface to mount
//! - **Events are structured**: native editor events travel as
//!   `EventPayload` records, not opaque blobs

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for one editor instance
///
/// Explicit identities come from the caller's `id` prop; anonymous
/// instances get a generated identity that stays fixed for the life of
/// the component. The identity doubles as the container element id, which
/// is why it is a string rather than an opaque token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorId(String);

impl EditorId {
    /// Creates an identity from an explicit caller-supplied id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh anonymous identity
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the raw identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the container selector for this identity (`"#" + id`)
    pub fn selector(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EditorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EditorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A native editor event as delivered to callback props
///
/// Native event payloads do not carry a reference to the editor, which is
/// why subscriptions pass the instance handle alongside the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Native event name (catalog entry)
    pub event: String,
    /// Structured event data, opaque to the bridge
    pub data: serde_json::Value,
}

impl EventPayload {
    /// Creates a payload with no data
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            data: serde_json::Value::Null,
        }
    }

    /// Attaches structured data to the payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }
}

/// Which container variant the host should mount
///
/// Inline editing enhances a content-bearing element in place; the
/// classic mode replaces an empty form element that carries the initial
/// value until the engine takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    /// Content-bearing element, enhanced in place (`inline` config)
    Inline,
    /// Plain form element carrying the initial value
    Plain,
}

/// Description of the single container element the host must mount
///
/// The bridge owns the decision of what to render; the host owns the
/// actual element. The container is hidden while an init is in flight so
/// un-enhanced markup never flashes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Element id, equal to the editor identity
    pub id: EditorId,
    /// Render variant
    pub kind: ContainerKind,
    /// Initial content (markup for `Inline`, default value for `Plain`)
    pub content: String,
    /// Whether the container is currently hidden
    pub hidden: bool,
    /// Pass-through class attribute
    pub class_name: Option<String>,
    /// Pass-through style attribute
    pub style: Option<String>,
}
