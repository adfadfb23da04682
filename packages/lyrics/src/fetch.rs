//! HTTP page fetching for candidate URLs.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{FetchError, FetchResult};

/// Fetch timeout per candidate page. A slow lyrics site should cost one
/// candidate, not the whole request.
const FETCH_TIMEOUT_SECS: u64 = 10;

/// Some lyrics sites reject default or bot-identified clients.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Retrieves raw page content over HTTP.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET the page body. Only a 2xx status is a success; anything else is a
    /// per-candidate failure.
    async fn fetch(&self, url: &Url) -> FetchResult<String>;
}

/// Production fetcher: one shared `reqwest` client with a browser-like
/// identity and a bounded timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    pub fn new() -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                .parse()
                .unwrap(),
        );
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            "en-US,en;q=0.5".parse().unwrap(),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<String> {
        debug!(url = %url, "Fetching candidate page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(FetchError::Http)
    }
}
