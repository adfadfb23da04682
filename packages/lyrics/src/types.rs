//! Core data types for the retrieval pipeline.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// How long a cached entry stays fresh before a lookup treats it as absent.
pub const CACHE_TTL_DAYS: i64 = 7;

/// Default cache TTL as a `Duration`.
pub fn cache_ttl() -> Duration {
    Duration::days(CACHE_TTL_DAYS)
}

/// An (artist, title) lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LyricsQuery {
    pub artist: String,
    pub title: String,
}

impl LyricsQuery {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    /// Normalized identity used as the cache key.
    ///
    /// Two queries that differ only in letter case or surrounding whitespace
    /// map to the same key and are treated as the same song.
    pub fn cache_key(&self) -> String {
        format!(
            "{}_{}",
            self.artist.trim().to_lowercase(),
            self.title.trim().to_lowercase()
        )
    }
}

/// A cached lyrics result, owned exclusively by the cache store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub key: String,
    pub lyrics: String,
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(key: impl Into<String>, lyrics: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            lyrics: lyrics.into(),
            created_at: Utc::now(),
        }
    }

    /// An entry is stale once its age reaches the TTL.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        Utc::now() - self.created_at >= ttl
    }
}

/// A scraped candidate page, produced per attempt and discarded after the
/// pipeline accepts or rejects it.
#[derive(Debug, Clone)]
pub struct RawCandidate {
    pub url: Url,
    pub extracted_text: String,
}

/// Where a retrieval result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Web,
}

/// The externally observable outcome of a retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LyricsResult {
    pub lyrics: String,
    pub source: Source,
}
