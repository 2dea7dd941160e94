use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use plaid_core::{ClientConfig, PlaidError, PlaidTransport};
use url::Url;

use crate::PlaidClient;
use crate::adapter::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, ReqwestTransport};

/// Builder for constructing a `PlaidClient` with a custom transport or endpoint.
pub struct PlaidClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn PlaidTransport>>,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl PlaidClientBuilder {
    /// Start from the given configuration, copied into the client on `build`.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            transport: None,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Send requests through `transport` instead of a fresh `ReqwestTransport`.
    ///
    /// When set, `timeout` and `user_agent` are ignored.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn PlaidTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the endpoint chosen by `ClientConfig::production`.
    ///
    /// Intended for local test servers and proxies. A trailing `/` is dropped.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout for the default transport (30s unless set).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// User agent for the default transport.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `PlaidError::Config` if the client id or secret is blank or the
    /// default transport cannot be created, and `PlaidError::InvalidArg` if the
    /// base URL override is not an absolute http(s) URL.
    pub fn build(self) -> Result<PlaidClient, PlaidError> {
        self.config.validate()?;

        let base_url_override = self
            .base_url
            .as_deref()
            .map(normalize_base_url)
            .transpose()?;

        let transport: Arc<dyn PlaidTransport> = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(
                self.timeout,
                self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT),
            )?),
        };

        Ok(PlaidClient {
            config: self.config,
            transport,
            base_url_override,
            base_url: OnceLock::new(),
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, PlaidError> {
    let parsed =
        Url::parse(raw).map_err(|e| PlaidError::InvalidArg(format!("base url {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(PlaidError::InvalidArg(format!(
            "base url must be http or https, got {}",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
