//! Typed views of installation responses.
//!
//! The resource methods return raw JSON. These structs cover the fields most
//! callers need; decode with [`from_body`].

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Decode a response body into a model.
///
/// # Errors
///
/// Returns [`AppsError::Decode`](crate::AppsError::Decode) if the body does not
/// have the expected shape.
pub fn from_body<T: DeserializeOwned>(body: Value) -> Result<T> {
    Ok(serde_json::from_value(body)?)
}

/// User or organization an installation belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Login name
    pub login: String,
    /// Numeric account id
    pub id: u64,
    /// `User` or `Organization`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// One installation of an app
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installation {
    /// Installation id
    pub id: u64,
    /// Account the app is installed on
    #[serde(default)]
    pub account: Option<Account>,
    /// Id of the installed app
    #[serde(default)]
    pub app_id: Option<u64>,
    /// `User` or `Organization`
    #[serde(default)]
    pub target_type: Option<String>,
    /// `all` or `selected`
    #[serde(default)]
    pub repository_selection: Option<String>,
    /// URL for creating access tokens
    #[serde(default)]
    pub access_tokens_url: Option<String>,
    /// URL listing accessible repositories
    #[serde(default)]
    pub repositories_url: Option<String>,
    /// Granted permissions, e.g. `contents: read`
    #[serde(default)]
    pub permissions: HashMap<String, String>,
    /// Subscribed webhook events
    #[serde(default)]
    pub events: Vec<String>,
}

/// Installation access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallationToken {
    /// Token value
    pub token: String,
    /// Expiry timestamp as sent by the API (RFC 3339)
    pub expires_at: String,
    /// Permissions granted to this token
    #[serde(default)]
    pub permissions: HashMap<String, String>,
    /// `all` or `selected`
    #[serde(default)]
    pub repository_selection: Option<String>,
}

/// Repository visible to an installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository id
    pub id: u64,
    /// Short name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
}

/// Page of repositories from `GET /installation/repositories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryList {
    /// Total accessible repositories, across all pages
    pub total_count: u64,
    /// Repositories on this page
    pub repositories: Vec<Repository>,
}
