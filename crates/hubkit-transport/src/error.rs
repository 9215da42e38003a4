//! Transport error type.

use thiserror::Error;

/// Failures reported by an [`HttpTransport`](crate::HttpTransport).
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, timeout or request-building failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        /// Response status code
        status: u16,
        /// The `message` field of the error body, when the API sent one
        message: Option<String>,
    },

    /// The response body was not valid JSON
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// `base_url` is not an http(s) URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A configured header value cannot be sent
    #[error("Invalid header value for {0}")]
    InvalidHeader(String),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for transport operations.
pub type Result<T, E = TransportError> = std::result::Result<T, E>;

impl TransportError {
    /// HTTP status of the failed response, if the failure was a status error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
