//! Structured audit trail of lifecycle transitions.

use editor_types::EditorId;
use serde::{Deserialize, Serialize};

/// One recorded lifecycle transition
///
/// `seq` is a per-controller monotonic sequence number, so the order of
/// transitions can be asserted even after filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// An editor instance was initialized under `id`
    Initialized {
        id: EditorId,
        generation: u64,
        seq: u64,
    },
    /// Content was pushed into a live instance on a content-only change
    ContentSynced { id: EditorId, seq: u64 },
    /// The stored identity was reassigned by an id prop change
    IdentityChanged {
        from: Option<EditorId>,
        to: EditorId,
        seq: u64,
    },
    /// The instance for `id` was removed from the engine
    TornDown { id: EditorId, seq: u64 },
}

impl LifecycleEvent {
    /// Sequence number of this event
    pub fn seq(&self) -> u64 {
        match self {
            LifecycleEvent::Initialized { seq, .. }
            | LifecycleEvent::ContentSynced { seq, .. }
            | LifecycleEvent::IdentityChanged { seq, .. }
            | LifecycleEvent::TornDown { seq, .. } => *seq,
        }
    }
}
