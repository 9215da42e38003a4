//! Resource error type.

use hubkit_transport::TransportError;
use thiserror::Error;

/// Errors returned by the installations resource.
#[derive(Error, Debug)]
pub enum AppsError {
    /// A required identifier was empty; no request was sent
    #[error("Invalid argument: {name} must not be empty")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
    },

    /// The transport failed; passed through unchanged
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A returned body did not match the requested model
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result alias for resource operations.
pub type Result<T, E = AppsError> = std::result::Result<T, E>;
