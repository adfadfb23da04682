//! Cache store for retrieved lyrics.
//!
//! Keyed by the query's normalized identity. Expiry is lazy: a stale entry is
//! reported as absent on lookup, indistinguishable from a miss.

use async_trait::async_trait;
use chrono::Duration;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::types::{cache_ttl, CacheEntry};

/// Key/value store mapping a normalized (artist, title) identity to a cached
/// lyrics result.
#[async_trait]
pub trait LyricsCache: Send + Sync {
    /// Return the entry for `key` if present and not stale.
    async fn get(&self, key: &str) -> Option<CacheEntry>;

    /// Insert or overwrite the entry for `key` with the current timestamp.
    /// Last write wins; there are no error conditions.
    async fn put(&self, key: &str, lyrics: &str);
}

/// In-memory cache with TTL-based freshness.
///
/// Created once at process start and alive for the process lifetime. Data is
/// lost on restart, which is acceptable for this service.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    /// Create a cache with the default 7-day TTL.
    pub fn new() -> Self {
        Self::with_ttl(cache_ttl())
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

#[async_trait]
impl LyricsCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<CacheEntry> {
        let stale = {
            let entries = self.entries.read().unwrap();
            match entries.get(key) {
                Some(entry) if !entry.is_stale(self.ttl) => return Some(entry.clone()),
                Some(_) => true,
                None => false,
            }
        };

        // Lazy expiry: a stale entry behaves like a miss, so drop it now
        // rather than letting dead keys accumulate.
        if stale {
            self.entries.write().unwrap().remove(key);
            tracing::debug!(key = %key, "Evicted stale cache entry");
        }

        None
    }

    async fn put(&self, key: &str, lyrics: &str) {
        let entry = CacheEntry::new(key, lyrics);
        self.entries.write().unwrap().insert(key.to_string(), entry);
    }
}
