//! # Editor Host
//!
//! Lifecycle controller bridging a declarative component to an imperative
//! editor engine.
//!
//! ## Philosophy
//!
//! - **One instance per identity**: the controller always tears down
//!   before re-initializing, so no two instances ever coexist for an id
//! - **Props are read-only**: configuration is cloned before the bridge
//!   augments it; the caller's copy is never mutated
//! - **Content waits for readiness**: content supplied at init time is
//!   deferred until the engine reports the instance ready
//! - **Capability-based**: the engine is injected behind `EditorEngine`,
//!   so the whole lifecycle is testable against a simulated engine
//! - **Auditable**: every lifecycle transition lands in a structured
//!   audit trail
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - An editor engine (no document model, no DOM)
//! - A UI framework (the host mounts the container; we describe it)
//! - A validator of configuration semantics
//! - A retry layer: engine failures propagate, the next natural
//!   mount/prop-change cycle is the only retry

pub mod audit;
pub mod host;
pub mod props;

pub use audit::LifecycleEvent;
pub use host::{EditorHost, HostError};
pub use props::{CallbackMap, EditorProps};
