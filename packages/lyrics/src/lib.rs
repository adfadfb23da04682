//! Lyrics retrieval and normalization pipeline.
//!
//! Given an (artist, title) pair, the pipeline searches the web for a
//! candidate lyrics page, scrapes and extracts its text, normalizes it into
//! clean stanza-formatted lyrics with an AI cleaning service, validates the
//! result, and caches it.
//!
//! # Design
//!
//! - Cache-first: a fresh cached entry short-circuits everything else.
//! - Skip-and-continue: per-candidate failures (denylisted domain, fetch
//!   error, thin extraction) move to the next candidate, never abort.
//! - Fail-open cleaning: if the AI service is unavailable, callers get raw
//!   scraped text instead of an error.
//! - Every external collaborator sits behind a trait so the pipeline is
//!   testable without network access.
//!
//! # Modules
//!
//! - [`types`] - Queries, cache entries, results
//! - [`cache`] - Cache store trait and in-memory implementation
//! - [`search`] - Web search providers
//! - [`fetch`] - Candidate page fetching
//! - [`extract`] - Plain-text extraction from markup
//! - [`filter`] - Denylist and length heuristics
//! - [`clean`] - AI-assisted normalization
//! - [`pipeline`] - The orchestrator
//! - [`testing`] - Mock implementations for consumers' tests

pub mod cache;
pub mod clean;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod pipeline;
pub mod search;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use cache::{LyricsCache, MemoryCache};
pub use clean::{GeminiCleaner, LyricsCleaner, NoopCleaner, MAX_CLEAN_INPUT};
pub use error::{FetchError, LyricsError};
pub use extract::extract_text;
pub use fetch::{HttpFetcher, PageFetcher};
pub use filter::{accept_text, is_denylisted, MIN_TEXT_LEN};
pub use pipeline::{LyricsService, DEFAULT_SEARCH_LIMIT, MIN_LYRICS_LEN};
pub use search::{
    lyrics_search_query, NoopSearcher, SearchHit, TavilySearcher, WebSearcher,
};
pub use types::{cache_ttl, CacheEntry, LyricsQuery, LyricsResult, RawCandidate, Source};
