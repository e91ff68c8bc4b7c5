//! Shared helpers for the lifecycle integration tests.
//!
//! Every scenario runs the real controller against the simulated engine;
//! readiness never fires until a test fires it.

use editor_host::EditorHost;
use editor_types::EditorId;
use engine_api::{EditorInstance, EventCallback, InstanceRef};
use sim_engine::SimEngine;
use std::cell::RefCell;
use std::rc::Rc;

/// Creates a controller wired to a fresh simulated engine
///
/// The returned engine handle is the test's window into call logs and
/// instances.
pub fn bootstrap() -> (EditorHost<SimEngine>, Rc<RefCell<SimEngine>>) {
    let engine = Rc::new(RefCell::new(SimEngine::new()));
    let host = EditorHost::new(Rc::clone(&engine));
    (host, engine)
}

/// A recorded callback invocation: event name and the handle's identity
pub type Invocation = (String, EditorId);

/// Builds a callback that records its invocations
pub fn recorder() -> (EventCallback, Rc<RefCell<Vec<Invocation>>>) {
    let invocations: Rc<RefCell<Vec<Invocation>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&invocations);
    let callback: EventCallback = Rc::new(move |payload, handle: &InstanceRef| {
        sink.borrow_mut()
            .push((payload.event.clone(), handle.id().clone()));
    });
    (callback, invocations)
}
