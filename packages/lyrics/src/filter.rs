//! Candidate filtering heuristics.
//!
//! Filtering is advisory-continue: a rejected candidate moves the pipeline to
//! the next one, it never aborts the retrieval.

use url::Url;

/// Platforms that rank well for song searches but never host readable lyrics
/// pages (video, streaming, app stores, social video). Checked before
/// fetching, by URL domain alone.
const DENYLISTED_DOMAINS: &[&str] = &[
    "youtube.com",
    "youtu.be",
    "vimeo.com",
    "dailymotion.com",
    "spotify.com",
    "soundcloud.com",
    "music.apple.com",
    "itunes.apple.com",
    "play.google.com",
    "tiktok.com",
    "facebook.com",
    "instagram.com",
];

/// Minimum length for an extraction to count as real page content. Below
/// this, the page is almost certainly an error page, paywall, or empty shell.
pub const MIN_TEXT_LEN: usize = 100;

/// Whether this URL points at a known non-lyrics platform.
pub fn is_denylisted(url: &Url) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_lowercase();

    DENYLISTED_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}

/// Whether extracted text is long enough to be worth cleaning.
pub fn accept_text(text: &str) -> bool {
    text.len() >= MIN_TEXT_LEN
}
