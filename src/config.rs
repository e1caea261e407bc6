//! Client configuration
//!
//! All settings the request builder and transport need are collected into a
//! [`ClientConfig`] value up front, so nothing downstream reads the process
//! environment directly. Environment values are layered first, then CLI flags.

use crate::constants;
use crate::error::Error;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are appended to (no trailing slash).
    pub base_url: String,
    /// Optional bearer token. Absent means unauthenticated, rate-limited access.
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            user_agent: constants::USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `CONTEXT7_API_KEY`, `CONTEXT7_BASE_URL` and `CONTEXT7_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL or timeout is malformed.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the base URL or timeout is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            api_key: lookup(constants::ENV_API_KEY).filter(|key| !key.trim().is_empty()),
            ..Self::default()
        };

        if let Some(url) = lookup(constants::ENV_BASE_URL).filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(&url)?;
        }

        if let Some(raw) = lookup(constants::ENV_TIMEOUT_SECS) {
            let secs = parse_timeout_secs(&raw).ok_or_else(|| {
                Error::Config(format!(
                    "Invalid {}: '{raw}'. Expected a positive number of seconds.",
                    constants::ENV_TIMEOUT_SECS
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replaces the base URL after checking it is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL does not parse or uses another scheme.
    pub fn with_base_url(mut self, url: &str) -> Result<Self, Error> {
        let trimmed = url.trim();
        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|e| Error::Config(format!("Invalid base URL '{trimmed}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Invalid base URL '{trimmed}': scheme must be http or https"
            )));
        }
        self.base_url = trimmed.trim_end_matches('/').to_string();
        Ok(self)
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }
}

fn parse_timeout_secs(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
}
