use anyhow::{bail, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which extraction backend serves parse requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorBackend {
    Rules,
    Llm,
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    pub extractor_backend: ExtractorBackend,
    /// Only required (and only read) when the llm backend is selected.
    pub anthropic_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let extractor_backend = match std::env::var("EXTRACTOR_BACKEND").as_deref() {
            Ok("llm") => ExtractorBackend::Llm,
            Ok("rules") | Err(_) => ExtractorBackend::Rules,
            Ok(other) => bail!("EXTRACTOR_BACKEND must be 'rules' or 'llm', got '{other}'"),
        };

        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        if extractor_backend == ExtractorBackend::Llm && anthropic_api_key.is_none() {
            bail!("ANTHROPIC_API_KEY is required when EXTRACTOR_BACKEND=llm");
        }

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be an integer byte count")?,
            extractor_backend,
            anthropic_api_key,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
