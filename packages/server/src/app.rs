//! Application setup and router construction.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use lyrics::{LyricsService, MemoryCache};

use crate::routes::{clean_handler, health_handler, lyrics_handler, root_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LyricsService>,
    pub cache: Arc<MemoryCache>,
    pub search_backend: &'static str,
    pub cleaner_backend: &'static str,
}

/// Build the Axum application router.
pub fn build_app(state: AppState) -> Router {
    // Wildcard CORS: web and mobile clients call this API directly
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/lyrics", get(lyrics_handler))
        .route("/clean", post(clean_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use lyrics::testing::{MockCleaner, MockFetcher, MockSearcher};
    use tower::ServiceExt;

    fn lyrics_page() -> String {
        format!(
            "<html><body><div>{}</div></body></html>",
            "Is this the real life? Is this just fantasy? ".repeat(20)
        )
    }

    fn test_app(searcher: MockSearcher, fetcher: MockFetcher, cleaner: MockCleaner) -> Router {
        let cache = Arc::new(MemoryCache::new());
        let service = Arc::new(LyricsService::new(
            cache.clone(),
            Arc::new(searcher),
            Arc::new(fetcher),
            Arc::new(cleaner),
        ));

        build_app(AppState {
            service,
            cache,
            search_backend: "mock",
            cleaner_backend: "mock",
        })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_lyrics_success_shape() {
        let app = test_app(
            MockSearcher::new()
                .with_urls("Queen Bohemian Rhapsody lyrics", &["https://ly.example/q"]),
            MockFetcher::new().with_page("https://ly.example/q", &lyrics_page()),
            MockCleaner::fixed("Is this the real life?\n\nIs this just fantasy?"),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/lyrics?artist=Queen&title=Bohemian%20Rhapsody")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["source"], "web");
        assert_eq!(
            json["lyrics"],
            "Is this the real life?\n\nIs this just fantasy?"
        );
    }

    #[tokio::test]
    async fn test_lyrics_not_found_is_404() {
        let app = test_app(
            MockSearcher::new(),
            MockFetcher::new(),
            MockCleaner::passthrough(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/lyrics?artist=Nobody&title=Nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["detail"], "Lyrics not found");
    }

    #[tokio::test]
    async fn test_blank_params_are_400() {
        let app = test_app(
            MockSearcher::new(),
            MockFetcher::new(),
            MockCleaner::passthrough(),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/lyrics?artist=%20&title=Hello")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_clean_endpoint() {
        let app = test_app(
            MockSearcher::new(),
            MockFetcher::new(),
            MockCleaner::fixed("clean stanza"),
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/clean")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"text\": \"ocr noise\"}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["cleaned_text"], "clean stanza");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app(
            MockSearcher::new(),
            MockFetcher::new(),
            MockCleaner::passthrough(),
        );

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["cache_entries"], 0);
    }
}
