//! Runtime configuration
//!
//! Defaults target the public Open Library deployment. Each value can be
//! overridden through a `BOOKFINDER_*` environment variable.

use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";
pub const DEFAULT_SEARCH_LIMIT: u32 = 12;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog and session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base of the search and work endpoints
    pub api_url: String,

    /// Base of cover image URLs
    pub covers_url: String,

    /// Result cap requested from the search endpoint
    pub search_limit: u32,

    /// Pause-in-typing interval before a search is issued
    pub debounce: Duration,

    /// Per-request HTTP timeout
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            debounce: DEFAULT_DEBOUNCE,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("BOOKFINDER_API_URL") {
            config.api_url = url;
        }
        if let Some(url) = lookup("BOOKFINDER_COVERS_URL") {
            config.covers_url = url;
        }
        if let Some(limit) = parse_var::<_, u32>(&lookup, "BOOKFINDER_SEARCH_LIMIT")? {
            if limit < 1 {
                return Err(ConfigError::InvalidValue {
                    key: "BOOKFINDER_SEARCH_LIMIT",
                    value: limit.to_string(),
                });
            }
            config.search_limit = limit;
        }
        if let Some(ms) = parse_var(&lookup, "BOOKFINDER_DEBOUNCE_MS")? {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(&lookup, "BOOKFINDER_TIMEOUT_MS")? {
            config.request_timeout = Duration::from_millis(ms);
        }

        Ok(config.normalized())
    }

    /// Override the API base URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        self.api_url = self.api_url.trim_end_matches('/').to_string();
        self.covers_url = self.covers_url.trim_end_matches('/').to_string();
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}
