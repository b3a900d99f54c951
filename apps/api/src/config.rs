use anyhow::{Context, Result};

use crate::matching::scoring::ReportMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no `.env` at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Default scoring backend; a request's `mode` field overrides it.
    pub scoring_mode: ReportMode,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let scoring_mode = match std::env::var("SCORING_MODE") {
            Ok(v) => ReportMode::parse(&v)
                .with_context(|| format!("SCORING_MODE must be 'skills' or 'tokens', got '{v}'"))?,
            Err(_) => ReportMode::Skills,
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_mode,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| "10485760".to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}
