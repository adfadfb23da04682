use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::app::AppState;

#[derive(Deserialize)]
pub struct CleanRequest {
    text: String,
}

#[derive(Serialize)]
pub struct CleanResponse {
    cleaned_text: String,
}

/// Clean arbitrary raw text (e.g. OCR output), bypassing search and scrape.
///
/// Never fails: the cleaner falls back to returning the input unchanged.
pub async fn clean_handler(
    Extension(state): Extension<AppState>,
    Json(request): Json<CleanRequest>,
) -> Json<CleanResponse> {
    let cleaned_text = state.service.clean_raw(&request.text).await;
    Json(CleanResponse { cleaned_text })
}
