//! Retrieval pipeline orchestration.
//!
//! Sequences cache lookup, web search, candidate scraping, AI cleaning, and
//! validation. Each retrieval runs strictly sequentially; external failures
//! are absorbed by moving to the next fallback stage, never by retrying.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::cache::LyricsCache;
use crate::clean::LyricsCleaner;
use crate::error::{LyricsError, Result};
use crate::extract::extract_text;
use crate::fetch::PageFetcher;
use crate::filter::{accept_text, is_denylisted, MIN_TEXT_LEN};
use crate::search::{lyrics_search_query, WebSearcher};
use crate::types::{LyricsQuery, LyricsResult, RawCandidate, Source};

/// How many search results to consider per retrieval. Slightly deeper than
/// strictly needed so the denylist and length filters have room to skip.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Minimum length for a cleaned result to count as viable lyrics.
pub const MIN_LYRICS_LEN: usize = 20;

/// The retrieval-and-normalization service.
///
/// Holds its collaborators as trait objects so every seam can be swapped for
/// a mock in tests or a different provider in production.
pub struct LyricsService {
    cache: Arc<dyn LyricsCache>,
    searcher: Arc<dyn WebSearcher>,
    fetcher: Arc<dyn PageFetcher>,
    cleaner: Arc<dyn LyricsCleaner>,
    search_limit: usize,
}

impl LyricsService {
    pub fn new(
        cache: Arc<dyn LyricsCache>,
        searcher: Arc<dyn WebSearcher>,
        fetcher: Arc<dyn PageFetcher>,
        cleaner: Arc<dyn LyricsCleaner>,
    ) -> Self {
        Self {
            cache,
            searcher,
            fetcher,
            cleaner,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    /// Retrieve lyrics for a query: cache first, then the full
    /// search/scrape/clean pipeline on a miss.
    pub async fn retrieve(&self, query: &LyricsQuery) -> Result<LyricsResult> {
        let key = query.cache_key();

        if let Some(entry) = self.cache.get(&key).await {
            debug!(key = %key, "Cache hit");
            return Ok(LyricsResult {
                lyrics: entry.lyrics,
                source: Source::Cache,
            });
        }

        let search_query = lyrics_search_query(query);
        info!(query = %search_query, "Cache miss, searching the web");

        let hits = match self.searcher.search(&search_query, self.search_limit).await {
            Ok(hits) => hits,
            Err(e) => {
                // Search being down reads as "lyrics not found" to callers,
                // never as a server fault.
                warn!(error = %e, "Search provider failed");
                return Err(e);
            }
        };

        if hits.is_empty() {
            info!(query = %search_query, "Search returned no results");
            return Err(LyricsError::NoCandidateFound);
        }

        let candidate = self
            .scrape_first_accepted(hits.iter().map(|h| &h.url))
            .await
            .ok_or(LyricsError::NoCandidateFound)?;

        let cleaned = match self.cleaner.clean(&candidate.extracted_text).await {
            Ok(cleaned) => cleaned,
            Err(e) => {
                // Fail open: degrade to raw scraped text rather than lose
                // the result.
                warn!(error = %e, "Cleaner failed, falling back to raw text");
                candidate.extracted_text.clone()
            }
        };

        let cleaned = cleaned.trim().to_string();
        if cleaned.len() < MIN_LYRICS_LEN {
            info!(
                url = %candidate.url,
                length = cleaned.len(),
                "Cleaned result too short to be lyrics"
            );
            return Err(LyricsError::ValidationFailed {
                length: cleaned.len(),
            });
        }

        self.cache.put(&key, &cleaned).await;
        info!(key = %key, url = %candidate.url, "Lyrics retrieved and cached");

        Ok(LyricsResult {
            lyrics: cleaned,
            source: Source::Web,
        })
    }

    /// Try candidates in rank order, returning the first accepted one.
    ///
    /// Denylisted domains are skipped before fetching; fetch failures and
    /// short extractions skip to the next candidate. `None` when every
    /// candidate is exhausted.
    async fn scrape_first_accepted<'a>(
        &self,
        candidates: impl Iterator<Item = &'a url::Url>,
    ) -> Option<RawCandidate> {
        for url in candidates {
            if is_denylisted(url) {
                debug!(url = %url, "Skipping denylisted domain");
                continue;
            }

            let html = match self.fetcher.fetch(url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(url = %url, error = %e, "Fetch failed, trying next candidate");
                    continue;
                }
            };

            let extracted_text = extract_text(&html);
            if !accept_text(&extracted_text) {
                debug!(
                    url = %url,
                    length = extracted_text.len(),
                    min = MIN_TEXT_LEN,
                    "Extraction too short, trying next candidate"
                );
                continue;
            }

            debug!(url = %url, length = extracted_text.len(), "Candidate accepted");
            return Some(RawCandidate {
                url: url.clone(),
                extracted_text,
            });
        }

        None
    }

    /// Clean arbitrary raw text, bypassing search and scrape entirely.
    ///
    /// Cleaner failures fail open here too: the caller always gets text back.
    pub async fn clean_raw(&self, text: &str) -> String {
        match self.cleaner.clean(text).await {
            Ok(cleaned) => cleaned,
            Err(e) => {
                warn!(error = %e, "Cleaner failed, returning raw text");
                text.to_string()
            }
        }
    }
}
