//! On-demand section route: fetch one catalog page by URL.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/section", post(post_section))
}

#[derive(Debug, Deserialize)]
struct SectionBody {
    #[serde(default)]
    url: String,
    #[serde(default = "super::default_session_id", rename = "sessionId")]
    session_id: String,
}

/// POST /api/section — fetch one catalog page and return its excerpt.
async fn post_section(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SectionBody>,
) -> Json<serde_json::Value> {
    if body.url.is_empty() {
        return Json(serde_json::json!({ "response": "No URL provided to scrape." }));
    }

    debug!("section request for {} (session {})", body.url, body.session_id);
    let response = state.engine.section_reply(&body.url).await;
    Json(serde_json::json!({ "response": response }))
}
