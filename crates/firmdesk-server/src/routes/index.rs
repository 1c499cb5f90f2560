//! The embedded chat page.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// GET / — single-page chat UI.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
