use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Nothing is strictly required: without `ANTHROPIC_API_KEY` the service runs
/// with the oracle disabled and every generative path answers with its fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub oracle_timeout: Duration,
    pub oracle_max_retries: u32,
    /// Sessions untouched for this long are dropped.
    pub session_idle_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            port: 8080,
            rust_log: "info".to_string(),
            oracle_timeout: Duration::from_secs(20),
            oracle_max_retries: 2,
            session_idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            oracle_timeout: Duration::from_secs(parse_env(
                "ORACLE_TIMEOUT_SECS",
                defaults.oracle_timeout.as_secs(),
            )?),
            oracle_max_retries: parse_env("ORACLE_MAX_RETRIES", defaults.oracle_max_retries)?,
            session_idle_timeout: Duration::from_secs(parse_env(
                "SESSION_IDLE_TIMEOUT_SECS",
                defaults.session_idle_timeout.as_secs(),
            )?),
        })
    }
}

/// Reads a variable, treating blank values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        None => Ok(default),
    }
}
