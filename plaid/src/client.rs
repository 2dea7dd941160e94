use std::sync::{Arc, OnceLock};

use plaid_core::{
    ApiRequest, AuthResponse, ClientConfig, Institutions, Place, PlaidError, PlaidTransport,
    RawResponse, parse_institutions, parse_place, parse_response,
};
use serde::Serialize;
use serde_json::Value;

use crate::builder::PlaidClientBuilder;
use crate::payload::{
    AuthPayload, Credentials, ExchangePayload, StepPayload, TokenPayload, UpgradePayload,
};

/// Client for the Plaid API.
///
/// Holds its own copy of the credentials and resolves the base URL once, on
/// first use. Each operation issues exactly one request.
pub struct PlaidClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn PlaidTransport>,
    pub(crate) base_url_override: Option<String>,
    pub(crate) base_url: OnceLock<String>,
}

/// Resource names are plain path segments: ASCII letters, digits, `_` and `-`.
fn validate_resource(resource: &str) -> Result<&str, PlaidError> {
    if resource.is_empty() {
        return Err(PlaidError::InvalidArg("resource must be a non-empty name".into()));
    }
    let plain = resource
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if !plain {
        return Err(PlaidError::InvalidArg(format!(
            "resource must contain only [A-Za-z0-9_-], got {resource:?}"
        )));
    }
    Ok(resource)
}

impl PlaidClient {
    /// Build a client with the default `reqwest` transport.
    ///
    /// # Errors
    /// Returns `PlaidError::Config` if the client id or secret is blank.
    pub fn new(config: ClientConfig) -> Result<Self, PlaidError> {
        Self::builder(config).build()
    }

    /// Start building a client from `config`.
    #[must_use]
    pub fn builder(config: ClientConfig) -> PlaidClientBuilder {
        PlaidClientBuilder::new(config)
    }

    /// Configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL every request targets. Fixed after the first call.
    pub fn base_url(&self) -> &str {
        self.base_url.get_or_init(|| {
            self.base_url_override
                .clone()
                .unwrap_or_else(|| self.config.environment().base_url().to_string())
        })
    }

    /// Authenticate a user at an institution (`POST /auth`).
    ///
    /// A 201 result is an MFA challenge to answer with [`Self::authenticate_step`].
    ///
    /// # Errors
    /// Transport and decode failures. API errors are returned as
    /// `AuthResponse::ApiError`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "plaid::client::authenticate", skip(self, username, password))
    )]
    pub async fn authenticate(
        &self,
        auth_type: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, PlaidError> {
        let payload = AuthPayload {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            auth_type,
            credentials: Credentials { username, password },
            email: None,
        };
        let raw = self.post("/auth", &payload).await?;
        parse_response(&raw)
    }

    /// Answer an MFA challenge (`POST /auth/step`).
    ///
    /// `mfa` is the answer: a string for questions and device codes, or a JSON
    /// value for list selections.
    ///
    /// # Errors
    /// Transport and decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "plaid::client::authenticate_step",
            skip(self, access_token, mfa)
        )
    )]
    pub async fn authenticate_step(
        &self,
        auth_type: &str,
        access_token: &str,
        mfa: impl Into<Value>,
    ) -> Result<AuthResponse, PlaidError> {
        let mfa = mfa.into();
        let payload = StepPayload {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            auth_type,
            access_token,
            mfa: &mfa,
        };
        let raw = self.post("/auth/step", &payload).await?;
        parse_response(&raw)
    }

    /// Fetch a product resource for a linked item (`POST /{resource}/get`),
    /// e.g. `"auth"`, `"connect"`, `"info"` or `"income"`.
    ///
    /// # Errors
    /// `PlaidError::InvalidArg` unless the resource is a non-empty name of ASCII
    /// letters, digits, `_` or `-`, checked before any request; otherwise
    /// transport and decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "plaid::client::get_request", skip(self, access_token))
    )]
    pub async fn get_request(
        &self,
        resource: &str,
        access_token: &str,
    ) -> Result<AuthResponse, PlaidError> {
        let resource = validate_resource(resource)?;
        let payload = TokenPayload {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            access_token,
        };
        let raw = self.post(&format!("/{resource}/get"), &payload).await?;
        parse_response(&raw)
    }

    /// Add a product to a linked item (`POST /upgrade`).
    ///
    /// `options` is omitted from the payload when `None`.
    ///
    /// # Errors
    /// `PlaidError::InvalidArg` unless the resource is a non-empty name of ASCII
    /// letters, digits, `_` or `-`, checked before any request; otherwise
    /// transport and decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "plaid::client::upgrade_to", skip(self, access_token, options))
    )]
    pub async fn upgrade_to(
        &self,
        resource: &str,
        access_token: &str,
        options: Option<Value>,
    ) -> Result<AuthResponse, PlaidError> {
        let resource = validate_resource(resource)?;
        let payload = UpgradePayload {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            access_token,
            upgrade_to: resource,
            options: options.as_ref(),
        };
        let raw = self.post("/upgrade", &payload).await?;
        parse_response(&raw)
    }

    /// Link an account for the Connect product (`POST /connect`).
    ///
    /// `email` is omitted from the payload when `None`.
    ///
    /// # Errors
    /// Transport and decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "plaid::client::add_account",
            skip(self, username, password, email)
        )
    )]
    pub async fn add_account(
        &self,
        auth_type: &str,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<AuthResponse, PlaidError> {
        let payload = AuthPayload {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            auth_type,
            credentials: Credentials { username, password },
            email,
        };
        let raw = self.post("/connect", &payload).await?;
        parse_response(&raw)
    }

    /// Look up a place by entity id (`GET /entity?entity_id=...`).
    ///
    /// # Errors
    /// `PlaidError::Data` if the body has no `entity` object, plus transport and
    /// decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "plaid::client::get_place", skip(self))
    )]
    pub async fn get_place(&self, entity_id: &str) -> Result<Place, PlaidError> {
        let request = ApiRequest::get(self.base_url(), "/entity", &[("entity_id", entity_id)]);
        let raw = self.transport.execute(request).await?;
        parse_place(&raw)
    }

    /// List supported institutions (`GET /institutions`).
    ///
    /// # Errors
    /// Transport and decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "plaid::client::get_institutions", skip(self))
    )]
    pub async fn get_institutions(&self) -> Result<Institutions, PlaidError> {
        let no_query: &[(&str, &str)] = &[];
        let request = ApiRequest::get(self.base_url(), "/institutions", no_query);
        let raw = self.transport.execute(request).await?;
        parse_institutions(&raw)
    }

    /// Exchange a public token for an access token (`POST /exchange_token`).
    ///
    /// # Errors
    /// Transport and decode failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "plaid::client::exchange", skip(self, public_token))
    )]
    pub async fn exchange(&self, public_token: &str) -> Result<AuthResponse, PlaidError> {
        let payload = ExchangePayload {
            client_id: &self.config.client_id,
            secret: &self.config.secret,
            public_token,
        };
        let raw = self.post("/exchange_token", &payload).await?;
        parse_response(&raw)
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<RawResponse, PlaidError> {
        let body = serde_json::to_value(payload)?;
        let request = ApiRequest::post(self.base_url(), path, body);
        self.transport.execute(request).await
    }
}
