//! Process configuration from environment variables.

use anyhow::{Context, Result};

/// Server configuration.
///
/// Both API keys are optional: a missing search key degrades retrieval to
/// "not found" and a missing cleaning key degrades the normalizer to a
/// pass-through. Neither is a startup failure.
pub struct Config {
    pub port: u16,
    pub tavily_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", value))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            tavily_api_key: non_empty_env("TAVILY_API_KEY"),
            gemini_api_key: non_empty_env("GEMINI_API_KEY"),
            gemini_model: non_empty_env("GEMINI_MODEL"),
        })
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
