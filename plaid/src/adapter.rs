use std::time::Duration;

use async_trait::async_trait;
use plaid_core::{ApiRequest, HttpMethod, PlaidError, PlaidTransport, RawResponse};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("plaid-rs/", env!("CARGO_PKG_VERSION"));

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Real transport backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a `reqwest::Client` with the given timeout and user agent.
    ///
    /// # Errors
    /// Returns `PlaidError::Config` if the TLS backend or the user agent cannot
    /// be initialized.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, PlaidError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| PlaidError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Build with `DEFAULT_TIMEOUT` and `DEFAULT_USER_AGENT`.
    ///
    /// # Errors
    /// See [`ReqwestTransport::new`].
    pub fn new_default() -> Result<Self, PlaidError> {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn map_reqwest_err(e: &reqwest::Error, operation: &str) -> PlaidError {
    if e.is_timeout() {
        PlaidError::timeout(operation)
    } else {
        PlaidError::transport(format!("{operation}: {e}"))
    }
}

#[async_trait]
impl PlaidTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, PlaidError> {
        let operation = request.operation();
        let builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url).query(&request.query),
            HttpMethod::Post => {
                let post = self.http.post(&request.url);
                match &request.body {
                    Some(body) => post.json(body),
                    None => post,
                }
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| map_reqwest_err(&e, &operation))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| map_reqwest_err(&e, &operation))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            status,
            body_len = body.len(),
            "plaid response"
        );

        Ok(RawResponse { status, body })
    }
}
