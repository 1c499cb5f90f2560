//! Shared application state.

use firmdesk_chat::ChatEngine;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub engine: ChatEngine,
}

impl AppState {
    pub fn new(engine: ChatEngine) -> Self {
        Self { engine }
    }
}
