// backend/src/config/mod.rs

use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db/utsc-exercise.db";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

impl Config {
    /// Loads `.env` if present, then reads `DATABASE_URL`, `PORT` and
    /// `SESSION_TTL_SECS`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let database_url = get("DATABASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let port = get("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let session_ttl = get("SESSION_TTL_SECS")
            .and_then(|s| s.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_SESSION_TTL_SECS);
        Self { database_url, port, session_ttl: Duration::from_secs(session_ttl) }
    }
}
