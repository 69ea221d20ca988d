//! Listener Registry
//!
//! One global key listener serves every open edit session. Instead of each
//! session attaching its own handler, a session enters this registry when it
//! opens and leaves it when it closes; the presenter routes cancel keys and
//! submits only to registered sessions.

use std::collections::BTreeSet;

use log::debug;

use crate::session::SessionId;

/// Sessions whose cancel-key and submit listeners are live
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    cancel_key: BTreeSet<SessionId>,
    submit: BTreeSet<SessionId>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register both edit listeners for `id`. Returns false if already registered.
    pub fn attach(&mut self, id: SessionId) -> bool {
        let added = self.cancel_key.insert(id);
        self.submit.insert(id);
        if added {
            debug!("[LISTENERS] attached session {}", id);
        }
        added
    }

    /// De-register both edit listeners for `id`. Returns false if none were registered.
    pub fn detach(&mut self, id: SessionId) -> bool {
        let removed = self.cancel_key.remove(&id);
        self.submit.remove(&id);
        if removed {
            debug!("[LISTENERS] detached session {}", id);
        }
        removed
    }

    pub fn has_cancel_listener(&self, id: SessionId) -> bool {
        self.cancel_key.contains(&id)
    }

    pub fn has_submit_listener(&self, id: SessionId) -> bool {
        self.submit.contains(&id)
    }

    /// Sessions that should receive the cancel key, in render order
    pub fn cancel_targets(&self) -> Vec<SessionId> {
        self.cancel_key.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.cancel_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cancel_key.is_empty()
    }

    pub fn clear(&mut self) {
        self.cancel_key.clear();
        self.submit.clear();
    }
}
