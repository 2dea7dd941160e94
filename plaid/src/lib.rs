//! Client for the Plaid API.
//!
//! Overview
//! - `PlaidClient` maps each operation onto one HTTP call against the sandbox
//!   (`https://tartan.plaid.com`) or production (`https://api.plaid.com`)
//!   endpoint, chosen from `ClientConfig::production`.
//! - Responses are normalized by status: 200 is `AuthResponse::Success`, 201 is
//!   `AuthResponse::MfaChallenge`, anything else is `AuthResponse::ApiError`.
//!   API errors are data; only argument, configuration, transport and decode
//!   failures are `Err`.
//! - HTTP goes through a `PlaidTransport`; the default is `ReqwestTransport`.
//!   Swap it via the builder to test against `plaid-mock` or a closure.
//!
//! Linking an account through a question-based MFA challenge:
//! ```rust,ignore
//! use plaid::{AuthResponse, ClientConfig, PlaidClient};
//!
//! let client = PlaidClient::new(ClientConfig::new("client-id", "secret"))?;
//! let mut resp = client.add_account("bofa", "plaid_test", "plaid_good", None).await?;
//! while let AuthResponse::MfaChallenge(challenge) = &resp {
//!     let token = challenge.access_token.clone().unwrap_or_default();
//!     resp = client.authenticate_step("bofa", &token, "tomato").await?;
//! }
//! let accounts = resp.into_result()?;
//! ```
#![warn(missing_docs)]

/// Production transport backed by `reqwest`.
pub mod adapter;
mod builder;
mod client;
mod payload;

pub use adapter::ReqwestTransport;
pub use builder::PlaidClientBuilder;
pub use client::PlaidClient;

pub use plaid_core::{ApiRequest, HttpMethod, PlaidTransport, RawResponse};
pub use plaid_types::{
    ApiErrorResponse, AuthResponse, AuthSuccess, ClientConfig, Environment, Institutions,
    MfaChallenge, Place, PlaidError,
};
