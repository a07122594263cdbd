use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default so the tool runs with zero setup, like the page
/// it replaces (which hardcoded its two data URLs).
#[derive(Debug, Clone)]
pub struct Config {
    /// Primary data source (the local resume API).
    pub data_url: String,
    /// Bundled static document: loader fallback and serve-mode store.
    pub data_file: PathBuf,
    /// Where render mode writes the finished page.
    pub out_file: PathBuf,
    pub port: u16,
    pub request_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_url: env_or("DATA_URL", "http://127.0.0.1:5000/api/db"),
            data_file: PathBuf::from(env_or("DATA_FILE", "data/resume.json")),
            out_file: PathBuf::from(env_or("OUT_FILE", "dist/index.html")),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "10")
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_SECS must be a number of seconds")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
