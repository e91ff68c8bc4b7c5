//! The lifecycle controller.
//!
//! Reconciles two object-lifetime models: a component that is repeatedly
//! handed new immutable props, and a stateful singleton-per-identity
//! editor instance with its own asynchronous readiness event. The
//! controller decides, per transition, whether to initialize,
//! re-initialize, merely sync content, or tear down.

use crate::audit::LifecycleEvent;
use crate::props::{CallbackMap, EditorProps};
use editor_types::{ContainerKind, ContainerSpec, EditorId};
use engine_api::{
    EditorConfig, EditorEngine, EditorInstance, EngineConfig, EngineError, InstanceRef, SetupFn,
    READY_EVENT,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Host error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    /// A transition arrived before the identity was resolved. This is a
    /// precondition violation: the host framework must mount first.
    #[error("component not mounted: identity not yet resolved")]
    NotMounted,

    /// A content sync was attempted with no live instance for the stored
    /// identity. Precondition violation, not a recoverable condition.
    #[error("no live editor instance for identity: {id}")]
    NoLiveInstance { id: EditorId },

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}

/// Per-component lifecycle controller
///
/// Owns the single mutable flag tracking whether an editor is attached
/// for the component's identity, and the decision procedure for prop
/// transitions. The engine is injected; `Rc<RefCell<_>>` because the
/// model is single-threaded cooperative and tests keep their own handle
/// to the simulated engine.
pub struct EditorHost<E: EditorEngine> {
    engine: Rc<RefCell<E>>,
    id: Option<EditorId>,
    attached: bool,
    hidden: bool,
    // shared with readiness closures, which outlive any borrow of self
    generation: Rc<Cell<u64>>,
    initialized: Rc<Cell<bool>>,
    audit: Vec<LifecycleEvent>,
    next_seq: u64,
}

impl<E: EditorEngine> EditorHost<E> {
    pub fn new(engine: Rc<RefCell<E>>) -> Self {
        Self {
            engine,
            id: None,
            attached: false,
            hidden: false,
            generation: Rc::new(Cell::new(0)),
            initialized: Rc::new(Cell::new(false)),
            audit: Vec::new(),
            next_seq: 0,
        }
    }

    /// Resolves and caches the component identity
    ///
    /// Explicit id prop if given, else a generated identity. Resolved at
    /// most once for the life of the component; subsequent mounts and
    /// renders reuse the cached value. Only an id prop change (see
    /// [`on_props_change`](Self::on_props_change)) reassigns it.
    pub fn resolve_identity(&mut self, props: &EditorProps) -> EditorId {
        if let Some(id) = &self.id {
            return id.clone();
        }
        let id = props
            .id
            .clone()
            .map(EditorId::new)
            .unwrap_or_else(EditorId::generate);
        self.id = Some(id.clone());
        id
    }

    /// Handles the mounted notification: resolve identity and initialize
    pub fn on_mount(&mut self, props: &EditorProps) -> Result<(), HostError> {
        self.resolve_identity(props);
        self.initialize(props.config.clone(), &props.content, &props.callbacks)
    }

    /// Handles a props transition, in fixed order:
    ///
    /// 1. an id change reassigns the stored identity (the live instance is
    ///    not re-pointed yet);
    /// 2. a config change initializes immediately under the stored
    ///    identity;
    /// 3. if either held, initialize once more with a fresh clone and stop
    ///    (a config change therefore runs two full init cycles, an id-only
    ///    change runs one -- preserved behavior, pinned by tests);
    /// 4. otherwise look up the live instance and, if content changed,
    ///    push it and collapse the selection to the end of the body.
    pub fn on_props_change(
        &mut self,
        prev: &EditorProps,
        next: &EditorProps,
    ) -> Result<(), HostError> {
        let id_changed = prev.id != next.id;
        let config_changed = prev.config != next.config;

        if id_changed {
            let to = match &next.id {
                Some(id) => EditorId::new(id.clone()),
                // id prop removed: fall back to a fresh generated identity
                None => EditorId::generate(),
            };
            let seq = self.next_seq();
            self.audit.push(LifecycleEvent::IdentityChanged {
                from: self.id.clone(),
                to: to.clone(),
                seq,
            });
            self.id = Some(to);
        }

        if config_changed {
            self.initialize(next.config.clone(), &next.content, &next.callbacks)?;
        }
        if config_changed || id_changed {
            self.initialize(next.config.clone(), &next.content, &next.callbacks)?;
            return Ok(());
        }

        let id = self.id.clone().ok_or(HostError::NotMounted)?;
        let instance = self
            .engine
            .borrow()
            .get(&id)
            .ok_or_else(|| HostError::NoLiveInstance { id: id.clone() })?;
        if prev.content != next.content {
            instance.set_content(&next.content);
            instance.select_body_end();
            let seq = self.next_seq();
            self.audit.push(LifecycleEvent::ContentSynced { id, seq });
        }
        Ok(())
    }

    /// Whether the container must be re-rendered for this transition
    ///
    /// True only when configuration changed. Re-rendering the container
    /// while an instance is attached would corrupt the editor's document,
    /// so every other prop change leaves the container alone.
    pub fn should_render(&self, prev: &EditorProps, next: &EditorProps) -> bool {
        prev.config != next.config
    }

    /// Handles the unmount notification: tear the instance down
    pub fn on_unmount(&mut self) -> Result<(), HostError> {
        self.teardown()
    }

    /// Describes the single container element the host must mount
    pub fn render(&mut self, props: &EditorProps) -> ContainerSpec {
        let id = self.resolve_identity(props);
        let kind = if props.config.inline {
            ContainerKind::Inline
        } else {
            ContainerKind::Plain
        };
        ContainerSpec {
            id,
            kind,
            content: props.content.clone(),
            hidden: self.hidden,
            class_name: props.class_name.clone(),
            style: props.style.clone(),
        }
    }

    /// Resolved identity, if any
    pub fn identity(&self) -> Option<&EditorId> {
        self.id.as_ref()
    }

    /// Whether an editor instance is currently attached
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether deferred content has been pushed for the current instance
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Structured audit trail, oldest first
    pub fn audit(&self) -> &[LifecycleEvent] {
        &self.audit
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Initializes an editor instance under the stored identity
    ///
    /// Tears down any attached instance first; no two instances may
    /// coexist for one identity. The caller's config arrives already
    /// cloned; this augments it with the container selector and the
    /// wrapped setup, then hands it to the engine. Engine failure
    /// propagates and leaves `attached` false (and the container hidden),
    /// so the next natural cycle retries cleanly.
    fn initialize(
        &mut self,
        config: EditorConfig,
        content: &str,
        callbacks: &CallbackMap,
    ) -> Result<(), HostError> {
        let id = self.id.clone().ok_or(HostError::NotMounted)?;
        if self.attached {
            self.teardown()?;
        }

        // hide the container so un-enhanced markup never flashes while
        // the engine initializes asynchronously
        self.hidden = true;
        self.initialized.set(false);

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let caller_setup = config.setup.clone();
        let callbacks = callbacks.clone();
        // empty content registers no deferred push
        let deferred = (!content.is_empty()).then(|| content.to_string());
        let generation_cell = Rc::clone(&self.generation);
        let initialized_cell = Rc::clone(&self.initialized);

        let setup: SetupFn = Box::new(move |instance: &InstanceRef| {
            event_map::bind_all(instance, &callbacks);
            if let Some(content) = deferred {
                instance.on(
                    READY_EVENT,
                    Rc::new(move |_payload, handle: &InstanceRef| {
                        // a readiness event left over from a torn-down or
                        // re-initialized generation must not write content
                        if generation_cell.get() != generation {
                            return;
                        }
                        initialized_cell.set(true);
                        handle.set_content(&content);
                    }),
                );
            }
            if let Some(setup) = caller_setup {
                setup(instance);
            }
        });

        let engine_config = EngineConfig {
            selector: id.selector(),
            inline: config.inline,
            options: config.options,
            setup: Some(setup),
        };
        self.engine.borrow_mut().init(engine_config)?;

        self.hidden = false;
        self.attached = true;
        let seq = self.next_seq();
        self.audit.push(LifecycleEvent::Initialized {
            id,
            generation,
            seq,
        });
        Ok(())
    }

    /// Removes the instance for the stored identity, forcibly
    ///
    /// Idempotent: a no-op when nothing is attached.
    fn teardown(&mut self) -> Result<(), HostError> {
        if !self.attached {
            return Ok(());
        }
        let id = self.id.clone().ok_or(HostError::NotMounted)?;

        // invalidate any readiness callback still in flight
        self.generation.set(self.generation.get() + 1);

        self.engine.borrow_mut().remove(&id, true)?;
        self.attached = false;
        let seq = self.next_seq();
        self.audit.push(LifecycleEvent::TornDown { id, seq });
        Ok(())
    }
}
