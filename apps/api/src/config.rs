use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_addr: String,
    pub rust_log: String,
    /// Upper bound on entries in any repeated résumé list.
    pub max_resume_entries: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            bind_addr: env_or("BIND_ADDR", "0.0.0.0"),
            rust_log: env_or("RUST_LOG", "info"),
            max_resume_entries: env_or("MAX_RESUME_ENTRIES", "50")
                .parse::<usize>()
                .context("MAX_RESUME_ENTRIES must be a non-negative integer")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
