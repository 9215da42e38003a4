//! Apps installations endpoints.
//!
//! Every method builds the path, the optional parameters and, for preview
//! endpoints, an `Accept` override, then makes exactly one transport call.
//! The override is part of that call's arguments; `Installations` itself has
//! no mutable state, so one instance can serve concurrent callers.

use std::fmt;
use std::sync::Arc;

use hubkit_transport::{Headers, HttpTransport, MediaType, Params};
use serde_json::Value;

use crate::error::Result;
use crate::id::{ResourceId, segment};

/// Media type the installation endpoints were previewed under
pub const MACHINE_MAN_PREVIEW: MediaType = MediaType::Preview("machine-man");

/// Client for the Apps installations API.
#[derive(Clone)]
pub struct Installations {
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Installations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Installations").finish_non_exhaustive()
    }
}

fn preview() -> Headers {
    MACHINE_MAN_PREVIEW.accept()
}

fn user_params(user_id: Option<u64>) -> Params {
    let mut params = Params::new();
    if let Some(id) = user_id {
        params.insert("user_id".to_string(), Value::from(id));
    }
    params
}

impl Installations {
    /// Wrap a transport. The transport may be shared with other resources.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create an access token for an installation, optionally on behalf of
    /// `user_id`.
    ///
    /// `POST /app/installations/{installation_id}/access_tokens`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// for an empty id, or the transport's error.
    pub async fn create_installation_token(
        &self,
        installation_id: impl Into<ResourceId>,
        user_id: Option<u64>,
    ) -> Result<Value> {
        let installation_id: ResourceId = installation_id.into();
        let id = segment("installation_id", installation_id.as_str())?;
        let path = format!("/app/installations/{id}/access_tokens");
        tracing::trace!("create_installation_token -> POST {path}");
        Ok(self
            .transport
            .post(&path, user_params(user_id), preview())
            .await?)
    }

    /// List installations of the authenticated app.
    ///
    /// `GET /app/installations`
    ///
    /// # Errors
    ///
    /// Returns the transport's error.
    pub async fn find_installations(&self) -> Result<Value> {
        tracing::trace!("find_installations -> GET /app/installations");
        Ok(self
            .transport
            .get("/app/installations", Params::new(), preview())
            .await?)
    }

    /// Fetch one installation of the authenticated app.
    ///
    /// `GET /app/installations/{installation_id}`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// for an empty id, or the transport's error.
    pub async fn get_installation(&self, installation_id: impl Into<ResourceId>) -> Result<Value> {
        let installation_id: ResourceId = installation_id.into();
        let id = segment("installation_id", installation_id.as_str())?;
        let path = format!("/app/installations/{id}");
        tracing::trace!("get_installation -> GET {path}");
        Ok(self.transport.get(&path, Params::new(), Headers::new()).await?)
    }

    /// Fetch the app's installation on an organization.
    ///
    /// `GET /org/{org}/installation`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// for an empty name, or the transport's error.
    pub async fn get_installation_for_organization(&self, org: &str) -> Result<Value> {
        let path = format!("/org/{}/installation", segment("org", org)?);
        tracing::trace!("get_installation_for_organization -> GET {path}");
        Ok(self.transport.get(&path, Params::new(), Headers::new()).await?)
    }

    /// Fetch the app's installation on a repository.
    ///
    /// `GET /repos/{owner}/{repo}/installation`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// if either name is empty, or the transport's error.
    pub async fn get_installation_for_repo(&self, owner: &str, repo: &str) -> Result<Value> {
        let path = format!(
            "/repos/{}/{}/installation",
            segment("owner", owner)?,
            segment("repo", repo)?
        );
        tracing::trace!("get_installation_for_repo -> GET {path}");
        Ok(self.transport.get(&path, Params::new(), Headers::new()).await?)
    }

    /// Fetch the app's installation on a user account.
    ///
    /// `GET /users/{username}/installation`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// for an empty name, or the transport's error.
    pub async fn get_installation_for_user(&self, username: &str) -> Result<Value> {
        let path = format!("/users/{}/installation", segment("username", username)?);
        tracing::trace!("get_installation_for_user -> GET {path}");
        Ok(self.transport.get(&path, Params::new(), Headers::new()).await?)
    }

    /// Uninstall the app from an account.
    ///
    /// `DELETE /app/installations/{installation_id}`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// for an empty id, or the transport's error.
    pub async fn remove_installation(&self, installation_id: impl Into<ResourceId>) -> Result<Value> {
        let installation_id: ResourceId = installation_id.into();
        let id = segment("installation_id", installation_id.as_str())?;
        let path = format!("/app/installations/{id}");
        tracing::trace!("remove_installation -> DELETE {path}");
        Ok(self
            .transport
            .delete(&path, Params::new(), Headers::new())
            .await?)
    }

    /// List repositories the authenticated installation can access.
    ///
    /// `GET /installation/repositories`
    ///
    /// # Errors
    ///
    /// Returns the transport's error.
    pub async fn list_repositories(&self, user_id: Option<u64>) -> Result<Value> {
        tracing::trace!("list_repositories -> GET /installation/repositories (user_id: {user_id:?})");
        Ok(self
            .transport
            .get("/installation/repositories", user_params(user_id), preview())
            .await?)
    }

    /// Add a repository to an installation.
    ///
    /// `PUT /installations/{installation_id}/repositories/{repository_id}`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// if either id is empty, or the transport's error.
    pub async fn add_repository(
        &self,
        installation_id: impl Into<ResourceId>,
        repository_id: impl Into<ResourceId>,
    ) -> Result<Value> {
        let path = repository_path(&installation_id.into(), &repository_id.into())?;
        tracing::trace!("add_repository -> PUT {path}");
        Ok(self.transport.put(&path, Params::new(), preview()).await?)
    }

    /// Remove a repository from an installation.
    ///
    /// `DELETE /installations/{installation_id}/repositories/{repository_id}`
    ///
    /// # Errors
    ///
    /// Returns [`AppsError::InvalidArgument`](crate::AppsError::InvalidArgument)
    /// if either id is empty, or the transport's error.
    pub async fn remove_repository(
        &self,
        installation_id: impl Into<ResourceId>,
        repository_id: impl Into<ResourceId>,
    ) -> Result<Value> {
        let path = repository_path(&installation_id.into(), &repository_id.into())?;
        tracing::trace!("remove_repository -> DELETE {path}");
        Ok(self.transport.delete(&path, Params::new(), preview()).await?)
    }
}

fn repository_path(installation_id: &ResourceId, repository_id: &ResourceId) -> Result<String> {
    Ok(format!(
        "/installations/{}/repositories/{}",
        segment("installation_id", installation_id.as_str())?,
        segment("repository_id", repository_id.as_str())?
    ))
}
