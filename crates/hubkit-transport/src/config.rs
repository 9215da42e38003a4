//! Transport configuration.
//!
//! Loaded from the environment or a TOML file. Every field has a default, so
//! an empty file or an empty environment yields a usable anonymous client.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, TransportError};
use crate::{DEFAULT_BASE_URL, USER_AGENT};

/// Connection settings for [`RestTransport`](crate::RestTransport).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// API root, e.g. `https://api.github.com` or a GHES `/api/v3` URL
    pub base_url: String,
    /// Sent as `Authorization: Bearer <token>` when set
    pub token: Option<String>,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl TransportConfig {
    /// Read `GITHUB_API_URL`, `GITHUB_TOKEN`, `HUBKIT_USER_AGENT` and
    /// `HUBKIT_TIMEOUT_SECS`. Unset or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup("GITHUB_API_URL").filter(|v| !v.is_empty()) {
            config.base_url = url;
        }
        config.token = lookup("GITHUB_TOKEN").filter(|v| !v.is_empty());
        if let Some(agent) = lookup("HUBKIT_USER_AGENT").filter(|v| !v.is_empty()) {
            config.user_agent = agent;
        }
        if let Some(secs) = lookup("HUBKIT_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            config.timeout_secs = secs;
        }
        config
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Config`] if the document is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that `base_url` is an http(s) URL and return it without a
    /// trailing slash.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidBaseUrl`] for any other scheme.
    pub fn validated_base_url(&self) -> Result<&str> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(TransportError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(self.base_url.trim_end_matches('/'))
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
