use std::fmt;
#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::PlaidError;

/// HTTP verbs used by the Plaid API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Query-string request without a body.
    Get,
    /// JSON body request.
    Post,
}

impl HttpMethod {
    /// Upper-case verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully-built request, ready for a transport.
///
/// `path` is kept next to the absolute `url` so in-memory transports can route
/// without parsing URLs.
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Absolute URL (`{base}{path}`).
    pub url: String,
    /// Path below the base URL, with a leading `/`.
    pub path: String,
    /// Query pairs, sent on GET requests.
    pub query: Vec<(String, String)>,
    /// JSON payload, sent on POST requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// POST `body` as JSON to `{base}{path}`.
    pub fn post(base: &str, path: impl Into<String>, body: Value) -> Self {
        let path = path.into();
        Self {
            method: HttpMethod::Post,
            url: format!("{base}{path}"),
            path,
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// GET `{base}{path}` with the given query pairs.
    pub fn get<K, V>(base: &str, path: impl Into<String>, query: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let path = path.into();
        Self {
            method: HttpMethod::Get,
            url: format!("{base}{path}"),
            path,
            query: query
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
                .collect(),
            body: None,
        }
    }

    /// Short label such as `POST /auth`, used in errors and spans.
    #[must_use]
    pub fn operation(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Value of a query parameter, if present.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

// Bodies carry credentials, so Debug only shows the routing half.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("has_body", &self.body.is_some())
            .finish_non_exhaustive()
    }
}

/// Status and undecoded body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl RawResponse {
    /// Build a response from a status and body text.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response whose body is the serialized `value`.
    #[must_use]
    pub fn json(status: u16, value: &Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }
}

/// Executes requests against Plaid (so we can inject mocks in tests).
///
/// Implementations return every HTTP status as data. Only failures to obtain
/// a response at all are errors.
#[async_trait]
pub trait PlaidTransport: Send + Sync {
    /// Send `request` and return the raw response.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, PlaidError>;
}

#[cfg(feature = "test-adapters")]
impl dyn PlaidTransport {
    /// Build a `PlaidTransport` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn PlaidTransport>
    where
        F: Send + Sync + 'static + Fn(ApiRequest) -> Result<RawResponse, PlaidError>,
    {
        struct FnTransport<F>(F);
        #[async_trait]
        impl<F> PlaidTransport for FnTransport<F>
        where
            F: Send + Sync + 'static + Fn(ApiRequest) -> Result<RawResponse, PlaidError>,
        {
            async fn execute(&self, request: ApiRequest) -> Result<RawResponse, PlaidError> {
                (self.0)(request)
            }
        }
        Arc::new(FnTransport(f))
    }
}
