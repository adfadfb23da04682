//! Web search for candidate lyrics pages.
//!
//! Abstracts over search providers so the pipeline can be tested without
//! network access. The production implementation uses Tavily.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::{LyricsError, Result};
use crate::types::LyricsQuery;

/// A candidate URL discovered by web search, in relevance order.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub url: Url,
    pub title: Option<String>,
    pub score: Option<f32>,
}

impl SearchHit {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            title: None,
            score: None,
        }
    }

    /// Create from a URL string, dropping unparseable URLs.
    pub fn from_url(url: &str) -> Option<Self> {
        Url::parse(url).ok().map(Self::new)
    }
}

/// Compose the search query for a lyrics lookup.
///
/// The trailing keyword biases results toward lyrics pages rather than
/// videos, reviews, or artist bios.
pub fn lyrics_search_query(query: &LyricsQuery) -> String {
    format!("{} {} lyrics", query.artist.trim(), query.title.trim())
}

/// Web search trait for candidate discovery.
#[async_trait]
pub trait WebSearcher: Send + Sync {
    /// Search the web and return up to `limit` results in relevance order.
    ///
    /// No results is an empty vec, not an error. Provider or network
    /// failures are reported as `LyricsError::SearchUnavailable` so the
    /// pipeline can treat them as "lyrics not found" instead of retrying.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}

/// Tavily-backed web searcher.
pub struct TavilySearcher {
    api_key: SecretString,
    client: reqwest::Client,
}

impl TavilySearcher {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

#[async_trait]
impl WebSearcher for TavilySearcher {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        #[derive(serde::Serialize)]
        struct Request<'a> {
            query: &'a str,
            search_depth: &'a str,
            max_results: usize,
        }

        #[derive(serde::Deserialize)]
        struct Response {
            results: Vec<TavilyResult>,
        }

        #[derive(serde::Deserialize)]
        struct TavilyResult {
            url: String,
            title: Option<String>,
            score: Option<f32>,
        }

        let request = Request {
            query,
            search_depth: "basic",
            max_results: limit,
        };

        let response = self
            .client
            .post("https://api.tavily.com/search")
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| LyricsError::SearchUnavailable(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LyricsError::SearchUnavailable(
                format!("Tavily API error {}: {}", status, body).into(),
            ));
        }

        let parsed: Response = response
            .json()
            .await
            .map_err(|e| LyricsError::SearchUnavailable(Box::new(e)))?;

        let hits = parsed
            .results
            .into_iter()
            .filter_map(|r| {
                let mut hit = SearchHit::from_url(&r.url)?;
                hit.title = r.title;
                hit.score = r.score;
                Some(hit)
            })
            .collect();

        Ok(hits)
    }
}

/// No-op searcher used when no search API key is configured.
pub struct NoopSearcher;

#[async_trait]
impl WebSearcher for NoopSearcher {
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchHit>> {
        tracing::warn!("NoopSearcher: search called but no search API key configured");
        Ok(vec![])
    }
}
