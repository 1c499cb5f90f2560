//! Per-session conversational state.

use dashmap::DashMap;
use firmdesk_nlp::Intent;

/// State carried from one turn to the next. Overwritten whole on every
/// turn, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub keywords: Vec<String>,
    pub intent: Intent,
}

/// Keyed session persistence. `update` runs its closure atomically with
/// respect to other calls for the same id.
pub trait SessionStore: Send + Sync {
    fn get(&self, session_id: &str) -> Option<SessionState>;

    fn put(&self, session_id: &str, state: SessionState);

    /// Read-modify-write under the per-id lock; returns the stored state.
    fn update(
        &self,
        session_id: &str,
        apply: &mut dyn FnMut(Option<&SessionState>) -> SessionState,
    ) -> SessionState;
}

/// In-memory store. The map's entry lock serializes read-modify-write per
/// session id; entries are never expired.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, SessionState>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<SessionState> {
        self.sessions.get(session_id).map(|entry| entry.clone())
    }

    fn put(&self, session_id: &str, state: SessionState) {
        self.sessions.insert(session_id.to_string(), state);
    }

    fn update(
        &self,
        session_id: &str,
        apply: &mut dyn FnMut(Option<&SessionState>) -> SessionState,
    ) -> SessionState {
        use dashmap::mapref::entry::Entry;

        match self.sessions.entry(session_id.to_string()) {
            Entry::Occupied(mut entry) => {
                let next = apply(Some(entry.get()));
                entry.insert(next.clone());
                next
            }
            Entry::Vacant(entry) => {
                let next = apply(None);
                entry.insert(next.clone());
                next
            }
        }
    }
}
