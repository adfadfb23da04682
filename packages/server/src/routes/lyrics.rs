use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use lyrics::{LyricsQuery, LyricsResult};

use crate::app::AppState;

#[derive(Deserialize)]
pub struct LyricsParams {
    artist: String,
    title: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    detail: String,
}

/// Retrieve lyrics for an (artist, title) pair.
///
/// Not-found outcomes (no search results, every candidate rejected, cleaned
/// result too short) map to 404: missing lyrics are an expected outcome, not
/// a server error.
pub async fn lyrics_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<LyricsParams>,
) -> Result<Json<LyricsResult>, (StatusCode, Json<ErrorResponse>)> {
    if params.artist.trim().is_empty() || params.title.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: "artist and title are required".to_string(),
            }),
        ));
    }

    let query = LyricsQuery::new(params.artist, params.title);

    match state.service.retrieve(&query).await {
        Ok(result) => Ok(Json(result)),
        Err(e) if e.is_not_found() => {
            tracing::info!(key = %query.cache_key(), error = %e, "Lyrics not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    detail: "Lyrics not found".to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!(key = %query.cache_key(), error = %e, "Retrieval failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: "Internal server error".to_string(),
                }),
            ))
        }
    }
}
