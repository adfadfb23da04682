//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the lyrics pipeline
//! without making real search, HTTP, or AI calls. Each mock records its calls
//! so tests can assert on what the pipeline did, not just what it returned.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use url::Url;

use crate::clean::LyricsCleaner;
use crate::error::{FetchError, FetchResult, LyricsError, Result};
use crate::fetch::PageFetcher;
use crate::search::{SearchHit, WebSearcher};

/// Mock searcher with canned results per query.
#[derive(Default)]
pub struct MockSearcher {
    results: RwLock<HashMap<String, Vec<SearchHit>>>,
    fail: bool,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add URL strings as results for a query.
    pub fn with_urls(self, query: &str, urls: &[&str]) -> Self {
        let hits = urls.iter().filter_map(|u| SearchHit::from_url(u)).collect();
        self.results.write().unwrap().insert(query.to_string(), hits);
        self
    }

    /// Make every search fail as if the provider were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Queries this searcher has been asked, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockSearcher {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        self.calls.write().unwrap().push(query.to_string());

        if self.fail {
            return Err(LyricsError::SearchUnavailable("mock provider down".into()));
        }

        let mut hits = self
            .results
            .read()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default();
        hits.truncate(limit);
        Ok(hits)
    }
}

/// Mock fetcher with canned page bodies per URL.
#[derive(Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<String, String>>,
    failures: RwLock<HashMap<String, u16>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`.
    pub fn with_page(self, url: &str, html: &str) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url.to_string(), html.to_string());
        self
    }

    /// Fail `url` with the given HTTP status.
    pub fn with_failure(self, url: &str, status: u16) -> Self {
        self.failures
            .write()
            .unwrap()
            .insert(url.to_string(), status);
        self
    }

    /// URLs fetched, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &Url) -> FetchResult<String> {
        let url_str = url.to_string();
        self.calls.write().unwrap().push(url_str.clone());

        if let Some(status) = self.failures.read().unwrap().get(&url_str) {
            return Err(FetchError::Status {
                status: *status,
                url: url_str,
            });
        }

        self.pages
            .read()
            .unwrap()
            .get(&url_str)
            .cloned()
            .ok_or(FetchError::Status {
                status: 404,
                url: url_str,
            })
    }
}

/// What a [`MockCleaner`] does with its input.
#[derive(Debug, Clone, Default)]
pub enum CleanerMode {
    /// Return the input unchanged.
    #[default]
    Passthrough,
    /// Return this fixed text for any input.
    Fixed(String),
    /// Report "no lyrics in input" (empty string).
    NotFound,
    /// Fail the call, exercising the pipeline's fail-open fallback.
    Fail,
}

/// Mock cleaner with a configurable response mode.
#[derive(Default)]
pub struct MockCleaner {
    mode: CleanerMode,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockCleaner {
    pub fn new(mode: CleanerMode) -> Self {
        Self {
            mode,
            calls: Arc::default(),
        }
    }

    pub fn passthrough() -> Self {
        Self::new(CleanerMode::Passthrough)
    }

    pub fn fixed(text: &str) -> Self {
        Self::new(CleanerMode::Fixed(text.to_string()))
    }

    /// Inputs this cleaner was given, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl LyricsCleaner for MockCleaner {
    async fn clean(&self, dirty: &str) -> Result<String> {
        self.calls.write().unwrap().push(dirty.to_string());

        match &self.mode {
            CleanerMode::Passthrough => Ok(dirty.to_string()),
            CleanerMode::Fixed(text) => Ok(text.clone()),
            CleanerMode::NotFound => Ok(String::new()),
            CleanerMode::Fail => Err(LyricsError::Cleaner("mock cleaner down".into())),
        }
    }
}
