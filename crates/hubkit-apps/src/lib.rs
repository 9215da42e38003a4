//! GitHub Apps installations resource.
//!
//! [`Installations`] maps each endpoint of the Apps installations API onto a
//! single call of an injected [`HttpTransport`](hubkit_transport::HttpTransport).
//!
//! ```no_run
//! use std::sync::Arc;
//! use hubkit_apps::{Installations, models};
//! use hubkit_transport::RestTransport;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let apps = Installations::new(Arc::new(RestTransport::from_env()?));
//! let body = apps.create_installation_token(42u64, None).await?;
//! let token: models::InstallationToken = models::from_body(body)?;
//! println!("expires at {}", token.expires_at);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod id;
pub mod installations;
pub mod models;

pub use error::{AppsError, Result};
pub use id::ResourceId;
pub use installations::{Installations, MACHINE_MAN_PREVIEW};
