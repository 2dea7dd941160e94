//! Client configuration and endpoint selection.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PlaidError;

/// Plaid deployment targeted by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// The "tartan" sandbox endpoint.
    #[default]
    Sandbox,
    /// The live production endpoint.
    Production,
}

impl Environment {
    /// Base URL for this environment, without a trailing slash.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Sandbox => "https://tartan.plaid.com",
            Self::Production => "https://api.plaid.com",
        }
    }

    fn parse(raw: &str) -> Result<Self, PlaidError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "sandbox" | "tartan" => Ok(Self::Sandbox),
            "production" | "prod" => Ok(Self::Production),
            other => Err(PlaidError::Config(format!("unknown PLAID_ENV value: {other}"))),
        }
    }
}

/// Credentials and endpoint flag copied into every client at construction.
///
/// A client owns its own copy, so mutating a `ClientConfig` after building a
/// client has no effect on that client. The secret is accepted when
/// deserializing but never written out.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Plaid client identifier (sent as `client_id`).
    pub client_id: String,
    /// Plaid secret (sent as `secret`).
    #[serde(skip_serializing)]
    pub secret: String,
    /// Target the production endpoint instead of the sandbox.
    #[serde(default)]
    pub production: bool,
}

impl ClientConfig {
    /// Environment variable holding the client identifier.
    pub const ENV_CLIENT_ID: &'static str = "PLAID_CLIENT_ID";
    /// Environment variable holding the secret.
    pub const ENV_SECRET: &'static str = "PLAID_SECRET";
    /// Environment variable selecting `sandbox` or `production`.
    pub const ENV_ENVIRONMENT: &'static str = "PLAID_ENV";

    /// Sandbox configuration with the given credentials.
    pub fn new(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            secret: secret.into(),
            production: false,
        }
    }

    /// Toggle the production endpoint.
    #[must_use]
    pub const fn production(mut self, yes: bool) -> Self {
        self.production = yes;
        self
    }

    /// Environment selected by the `production` flag.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Sandbox
        }
    }

    /// Load configuration from `PLAID_CLIENT_ID`, `PLAID_SECRET` and `PLAID_ENV`.
    ///
    /// # Errors
    /// Returns `PlaidError::Config` if the credentials are missing or empty, or
    /// if `PLAID_ENV` names an unknown environment.
    pub fn from_env() -> Result<Self, PlaidError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, keyed by the same variable names
    /// as [`Self::from_env`].
    ///
    /// # Errors
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlaidError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .ok_or_else(|| PlaidError::Config(format!("{key} must be set")))
        };
        let client_id = required(Self::ENV_CLIENT_ID)?;
        let secret = required(Self::ENV_SECRET)?;
        let environment = match lookup(Self::ENV_ENVIRONMENT) {
            Some(raw) => Environment::parse(&raw)?,
            None => Environment::Sandbox,
        };

        let cfg = Self::new(client_id, secret);
        let cfg = cfg.production(environment == Environment::Production);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that both credentials are present.
    ///
    /// # Errors
    /// Returns `PlaidError::Config` when the client id or the secret is blank.
    pub fn validate(&self) -> Result<(), PlaidError> {
        if self.client_id.trim().is_empty() {
            return Err(PlaidError::Config("client_id must not be empty".into()));
        }
        if self.secret.trim().is_empty() {
            return Err(PlaidError::Config("secret must not be empty".into()));
        }
        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .field("production", &self.production)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parse_accepts_aliases() {
        assert_eq!(Environment::parse("").unwrap(), Environment::Sandbox);
        assert_eq!(Environment::parse("Tartan").unwrap(), Environment::Sandbox);
        assert_eq!(Environment::parse(" PROD ").unwrap(), Environment::Production);
        assert!(matches!(Environment::parse("staging"), Err(PlaidError::Config(_))));
    }
}
