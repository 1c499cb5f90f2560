//! Welcome route — greeting plus the navigation payload.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/welcome", get(get_welcome))
}

/// GET /api/welcome — welcome message and navigation items.
async fn get_welcome(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let (message, nav_items) = state.engine.navigation();
    Json(serde_json::json!({
        "message": message,
        "navItems": nav_items,
    }))
}
