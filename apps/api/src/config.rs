use std::str::FromStr;

use anyhow::{Context, Result};

use crate::clues::dictionary::DEFAULT_DICTIONARY_URL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub dictionary_api_url: String,
    pub clue_lookup_enabled: bool,
    pub clue_lookup_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub cors_allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            rust_log: "info".to_string(),
            dictionary_api_url: DEFAULT_DICTIONARY_URL.to_string(),
            clue_lookup_enabled: true,
            clue_lookup_timeout_secs: 5,
            max_upload_bytes: 10 * 1024 * 1024,
            cors_allowed_origin: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            dictionary_api_url: std::env::var("DICTIONARY_API_URL")
                .unwrap_or(defaults.dictionary_api_url),
            clue_lookup_enabled: parse_env("CLUE_LOOKUP_ENABLED", defaults.clue_lookup_enabled)?,
            clue_lookup_timeout_secs: parse_env(
                "CLUE_LOOKUP_TIMEOUT_SECS",
                defaults.clue_lookup_timeout_secs,
            )?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}
