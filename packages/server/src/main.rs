use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lyrics::{
    GeminiCleaner, HttpFetcher, LyricsCleaner, LyricsService, MemoryCache, NoopCleaner,
    NoopSearcher, TavilySearcher, WebSearcher,
};

use server::app::{build_app, AppState};
use server::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server=debug,lyrics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    let cache = Arc::new(MemoryCache::new());

    let (searcher, search_backend): (Arc<dyn WebSearcher>, &'static str) =
        match &config.tavily_api_key {
            Some(key) => (Arc::new(TavilySearcher::new(key.clone())), "tavily"),
            None => {
                tracing::warn!("TAVILY_API_KEY not set, web search disabled");
                (Arc::new(NoopSearcher), "noop")
            }
        };

    let (cleaner, cleaner_backend): (Arc<dyn LyricsCleaner>, &'static str) =
        match &config.gemini_api_key {
            Some(key) => {
                let cleaner = match &config.gemini_model {
                    Some(model) => GeminiCleaner::with_model(key.clone(), model.clone()),
                    None => GeminiCleaner::new(key.clone()),
                };
                (Arc::new(cleaner), "gemini")
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set, lyrics cleaning disabled");
                (Arc::new(NoopCleaner), "noop")
            }
        };

    let service = Arc::new(LyricsService::new(
        cache.clone(),
        searcher,
        Arc::new(HttpFetcher::new()),
        cleaner,
    ));

    let app = build_app(AppState {
        service,
        cache,
        search_backend,
        cleaner_backend,
    });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, search = search_backend, cleaner = cleaner_backend, "Server listening");

    axum::serve(listener, app)
        .await
        .context("Server exited with error")?;

    Ok(())
}
