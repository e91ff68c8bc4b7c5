//! Immutable component props as handed down by the host framework.

use engine_api::{EditorConfig, EventCallback};
use event_map::CallbackLookup;
use std::collections::HashMap;
use std::fmt;

/// Callback props keyed by their derived prop name (`"onClick"`, ...)
pub type CallbackMap = HashMap<String, EventCallback>;

/// One snapshot of the component's props
///
/// The host framework hands the controller a fresh, immutable snapshot on
/// every transition; the controller never mutates it. Missing `id` means
/// an anonymous instance (the controller generates and caches an
/// identity). Missing config and empty content are the defaults.
#[derive(Clone, Default)]
pub struct EditorProps {
    /// Explicit identity, if the caller supplied one
    pub id: Option<String>,
    /// Declarative editor configuration
    pub config: EditorConfig,
    /// Raw markup content
    pub content: String,
    /// Pass-through class attribute for the container
    pub class_name: Option<String>,
    /// Pass-through style attribute for the container
    pub style: Option<String>,
    /// Optional event callbacks, keyed by derived prop name
    pub callbacks: CallbackMap,
}

impl EditorProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Supplies a callback for a derived prop name (e.g. `"onNodeChange"`)
    pub fn with_callback(mut self, prop_name: impl Into<String>, callback: EventCallback) -> Self {
        self.callbacks.insert(prop_name.into(), callback);
        self
    }
}

impl CallbackLookup for EditorProps {
    fn callback(&self, prop_name: &str) -> Option<EventCallback> {
        self.callbacks.get(prop_name).cloned()
    }
}

impl fmt::Debug for EditorProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut callback_props: Vec<&str> = self.callbacks.keys().map(String::as_str).collect();
        callback_props.sort_unstable();
        f.debug_struct("EditorProps")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("content", &self.content)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("callbacks", &callback_props)
            .finish()
    }
}
