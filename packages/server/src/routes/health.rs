use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    cache_entries: usize,
    search: String,
    cleaner: String,
}

#[derive(Serialize)]
pub struct RootResponse {
    status: String,
}

/// Health check endpoint.
///
/// The pipeline has no stateful backends to probe; liveness plus which
/// collaborators are configured is the whole story.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        cache_entries: state.cache.len(),
        search: state.search_backend.to_string(),
        cleaner: state.cleaner_backend.to_string(),
    })
}

/// Root status endpoint.
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        status: "Lyrics API is running".to_string(),
    })
}
