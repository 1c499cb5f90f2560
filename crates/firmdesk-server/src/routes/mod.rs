//! HTTP route handlers backing the chat page.

pub mod chat;
pub mod index;
pub mod section;
pub mod welcome;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(index::routes())
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(welcome::routes())
        .merge(section::routes())
        .merge(chat::routes())
}

// Both POST bodies carry an optional session identifier.
pub(crate) fn default_session_id() -> String {
    "default".to_string()
}
