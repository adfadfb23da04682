//! Typed errors for the lyrics library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can surface from a retrieval run.
#[derive(Debug, Error)]
pub enum LyricsError {
    /// Search provider unreachable or returned a failure
    #[error("search provider unavailable: {0}")]
    SearchUnavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Every candidate was skipped (denylisted, fetch failed, or too short)
    #[error("no usable lyrics page found")]
    NoCandidateFound,

    /// Cleaned output was empty or below the minimum viable length
    #[error("cleaned lyrics failed validation ({length} chars)")]
    ValidationFailed { length: usize },

    /// Cleaning service call failed. Always recovered via the fail-open
    /// fallback inside the pipeline, never surfaced to callers.
    #[error("cleaning service error: {0}")]
    Cleaner(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LyricsError {
    /// Whether this error maps to the caller-visible "lyrics not found"
    /// outcome. Absence of lyrics is an expected result, not a system fault,
    /// so search failures collapse into it as well.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LyricsError::SearchUnavailable(_)
                | LyricsError::NoCandidateFound
                | LyricsError::ValidationFailed { .. }
        )
    }
}

/// Errors from fetching a single candidate page.
///
/// Per-candidate only: the pipeline logs these and moves on to the next
/// candidate, they never abort a retrieval.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-2xx response status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Result type alias for retrieval operations.
pub type Result<T> = std::result::Result<T, LyricsError>;

/// Result type alias for per-candidate fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_collapse() {
        let search = LyricsError::SearchUnavailable("boom".into());
        let no_candidate = LyricsError::NoCandidateFound;
        let validation = LyricsError::ValidationFailed { length: 3 };
        let cleaner = LyricsError::Cleaner("boom".into());

        assert!(search.is_not_found());
        assert!(no_candidate.is_not_found());
        assert!(validation.is_not_found());
        assert!(!cleaner.is_not_found());
    }

    #[test]
    fn test_display_messages() {
        let err = LyricsError::ValidationFailed { length: 7 };
        assert_eq!(err.to_string(), "cleaned lyrics failed validation (7 chars)");

        let err = FetchError::Status {
            status: 503,
            url: "https://example.com".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 for https://example.com");
    }
}
