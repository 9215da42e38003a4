//! `reqwest`-backed transport.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::TransportConfig;
use crate::error::{Result, TransportError};
use crate::request::{ApiRequest, MediaType, Method};
use crate::traits::HttpTransport;

/// Sends [`ApiRequest`]s to a REST API root over one shared `reqwest::Client`.
///
/// Default `Accept`, `User-Agent` and `Authorization` headers are installed on
/// the client; per-request overrides take precedence for that request only.
#[derive(Debug, Clone)]
pub struct RestTransport {
    client: Client,
    base_url: String,
}

impl RestTransport {
    /// Build a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s), the token or user
    /// agent contain bytes not allowed in a header, or the client cannot be
    /// built.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let base_url = config.validated_base_url()?.to_string();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_str(&MediaType::Json.to_string())
                .map_err(|_| TransportError::InvalidHeader("accept".to_string()))?,
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| TransportError::InvalidHeader("authorization".to_string()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| TransportError::InvalidHeader("user-agent".to_string()))?;

        let client = Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build a transport from [`TransportConfig::from_env`].
    ///
    /// # Errors
    ///
    /// See [`RestTransport::new`].
    pub fn from_env() -> Result<Self> {
        Self::new(&TransportConfig::from_env())
    }

    /// API root every request path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpTransport for RestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);
        tracing::debug!(
            "{} {} (header overrides: {})",
            request.method,
            request.url_path(),
            request.headers.len()
        );

        let mut builder = self.client.request(request.method.into(), &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.params.is_empty() {
            builder = match request.method {
                Method::Get => builder.query(&request.params),
                Method::Post | Method::Put | Method::Delete => builder.json(&request.params),
            };
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&body).ok().and_then(|v| {
                v.get("message")
                    .and_then(Value::as_str)
                    .map(ToString::to_string)
            });
            tracing::warn!("{} {} failed with {status}", request.method, request.path);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}
