//! The transport capability seam.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::request::{ApiRequest, Headers, Method, Params};

/// Something that can carry an [`ApiRequest`] to the API and decode the reply.
///
/// Only [`send`](HttpTransport::send) is required. The verb helpers build the
/// descriptor and forward to it, so header overrides always travel with the
/// call that needs them.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute one request and return the decoded JSON body.
    ///
    /// An empty response body decodes to [`Value::Null`].
    async fn send(&self, request: ApiRequest) -> Result<Value>;

    /// GET `path`, sending `params` as the query string.
    async fn get(&self, path: &str, params: Params, headers: Headers) -> Result<Value> {
        self.send(request(Method::Get, path, params, headers)).await
    }

    /// POST `path`, sending `params` as a JSON body.
    async fn post(&self, path: &str, params: Params, headers: Headers) -> Result<Value> {
        self.send(request(Method::Post, path, params, headers)).await
    }

    /// PUT `path`, sending `params` as a JSON body.
    async fn put(&self, path: &str, params: Params, headers: Headers) -> Result<Value> {
        self.send(request(Method::Put, path, params, headers)).await
    }

    /// DELETE `path`, sending `params` as a JSON body.
    async fn delete(&self, path: &str, params: Params, headers: Headers) -> Result<Value> {
        self.send(request(Method::Delete, path, params, headers)).await
    }
}

fn request(method: Method, path: &str, params: Params, headers: Headers) -> ApiRequest {
    ApiRequest::new(method, path)
        .with_params(params)
        .with_headers(headers)
}
