//! AI-assisted text normalization.
//!
//! Turns noisy scraped text into lyrics-only, stanza-separated output via the
//! Gemini `generateContent` API. The cleaner fails open: if the service is
//! unreachable or answers nonsense, the caller gets the input back unchanged
//! and the pipeline degrades to raw scraped text instead of losing the result.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

use crate::error::Result;

/// Input cap sent to the cleaning service, in characters. Keeps the request
/// inside the model's practical input limits.
pub const MAX_CLEAN_INPUT: usize = 9000;

/// Token the model is instructed to emit when the input contains no lyrics.
const NOT_FOUND_SENTINEL: &str = "NO_LYRICS_FOUND";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const CLEAN_TIMEOUT_SECS: u64 = 30;

/// Normalizes noisy extracted text into clean lyrics.
#[async_trait]
pub trait LyricsCleaner: Send + Sync {
    /// Clean `dirty` into lyrics-only text with stanzas separated by blank
    /// lines. An empty string means the service decided there are no lyrics
    /// in the input.
    async fn clean(&self, dirty: &str) -> Result<String>;
}

/// Identity pass-through used when no cleaning credential is configured.
/// Degrades quality, never availability.
pub struct NoopCleaner;

#[async_trait]
impl LyricsCleaner for NoopCleaner {
    async fn clean(&self, dirty: &str) -> Result<String> {
        Ok(dirty.to_string())
    }
}

/// Gemini-backed cleaner.
pub struct GeminiCleaner {
    api_key: SecretString,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiCleaner {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(CLEAN_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Set the base URL (for testing only)
    #[cfg(test)]
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url;
    }

    fn prompt_for(dirty: &str) -> String {
        let input = truncate_chars(dirty, MAX_CLEAN_INPUT);
        format!(
            "You are a professional musician's assistant. The text below was \
             scraped from a lyrics web page and is noisy: it may contain menu \
             labels, ads, page numbers, links, and transcription garbage.\n\
             \n\
             YOUR TASK:\n\
             1. Extract only the song lyrics, nothing else.\n\
             2. Delete all headings, numbers, web links, and navigation residue.\n\
             3. Correct obvious transcription errors.\n\
             4. Separate stanzas with one blank line between them.\n\
             5. Output no commentary of any kind, only the lyrics.\n\
             6. If the text contains no song lyrics at all, reply with \
             exactly {NOT_FOUND_SENTINEL} and nothing else.\n\
             \n\
             TEXT TO PROCESS:\n\
             {input}"
        )
    }

    /// Pull the first candidate's text out of a generateContent response.
    fn response_text(response: GenerateResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[async_trait]
impl LyricsCleaner for GeminiCleaner {
    async fn clean(&self, dirty: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt_for(dirty),
                }],
            }],
        };

        let response = match self
            .client
            .post(&url)
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Cleaning request failed, returning raw text");
                return Ok(dirty.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Cleaning API error, returning raw text");
            return Ok(dirty.to_string());
        }

        let parsed: GenerateResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Unparseable cleaning response, returning raw text");
                return Ok(dirty.to_string());
            }
        };

        let Some(text) = Self::response_text(parsed) else {
            warn!("Cleaning response had no candidate text, returning raw text");
            return Ok(dirty.to_string());
        };

        let cleaned = text.trim();
        if cleaned.contains(NOT_FOUND_SENTINEL) {
            return Ok(String::new());
        }

        Ok(cleaned.to_string())
    }
}

/// Truncate to at most `max` characters without splitting a code point.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
