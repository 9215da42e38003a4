//! Transport layer shared by hubkit resource clients.
//!
//! Resource groups describe each call as an [`ApiRequest`] and hand it to an
//! [`HttpTransport`]. [`RestTransport`] is the production implementation over
//! `reqwest`; tests substitute their own.

pub mod config;
pub mod error;
pub mod request;
pub mod rest;
pub mod traits;

pub use config::TransportConfig;
pub use error::{Result, TransportError};
pub use request::{ACCEPT, ApiRequest, Headers, MediaType, Method, Params};
pub use rest::RestTransport;
pub use traits::HttpTransport;

/// User Agent string sent when the configuration does not override it
pub const USER_AGENT: &str = concat!("hubkit/", env!("CARGO_PKG_VERSION"));

/// Default REST API root
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
