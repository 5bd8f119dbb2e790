//! HTTP routes.

use crate::{inspiration::inspiration_handler, story::story_handler, AppState};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Creates the StoryWeaver router.
///
/// | Route | Handler |
/// |---|---|
/// | `POST /story` | next story beat |
/// | `POST /inspiration` | inspiration kit |
/// | `GET /health` | liveness |
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/story", post(story_handler))
        .route("/inspiration", post(inspiration_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
