//! Per-call request descriptors.
//!
//! An [`ApiRequest`] carries everything one call needs, including any header
//! override. Nothing about a call is stored on the transport or on the
//! resource that built it.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// Request parameters: query string for GET, JSON body otherwise.
pub type Params = BTreeMap<String, Value>;

/// Per-call header overrides, keyed by lowercase header name.
pub type Headers = BTreeMap<String, String>;

/// Header name used for media type overrides
pub const ACCEPT: &str = "accept";

/// HTTP verbs used by the REST resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Upper-case verb as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Media types understood by the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// The stable v3 JSON media type
    Json,
    /// A named preview, e.g. `machine-man`
    Preview(&'static str),
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("application/vnd.github.v3+json"),
            Self::Preview(name) => write!(f, "application/vnd.github.{name}-preview+json"),
        }
    }
}

impl MediaType {
    /// A header override map selecting this media type.
    pub fn accept(self) -> Headers {
        Headers::from([(ACCEPT.to_string(), self.to_string())])
    }
}

/// One outgoing call: verb, encoded path, parameters and header overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Path relative to the API root, with segments already encoded
    pub path: String,
    /// Parameters; an empty map is never put on the wire
    pub params: Params,
    /// Headers sent verbatim with this call only
    pub headers: Headers,
}

impl ApiRequest {
    /// A request with no parameters and no header overrides.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            headers: Headers::new(),
        }
    }

    /// Replace the parameter set.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Add one header override. Names are stored lowercase.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    /// Add every override in `headers`.
    pub fn with_headers(self, headers: Headers) -> Self {
        headers
            .into_iter()
            .fold(self, |req, (name, value)| req.with_header(&name, value))
    }

    /// Look up an override, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Path plus percent-encoded query string as a GET would send it.
    pub fn url_path(&self) -> String {
        if self.method != Method::Get || self.params.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{}={}", urlencoding::encode(k), urlencoding::encode(&v))
            })
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}
