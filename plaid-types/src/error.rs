use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Plaid client crates.
///
/// API-level failures (any status other than 200/201) are normally returned as
/// data in `AuthResponse::ApiError`; `Api` only appears when a caller opts in via
/// `AuthResponse::into_result`.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlaidError {
    /// Invalid input argument, detected before any request is sent.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Missing or malformed client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP transport failed (connection refused, TLS, protocol).
    #[error("transport failed: {msg}")]
    Transport {
        /// Human-readable error message from the transport.
        msg: String,
    },

    /// The HTTP transport gave up waiting for a response.
    #[error("request timed out: {operation}")]
    Timeout {
        /// Request that timed out, e.g. "POST /auth".
        operation: String,
    },

    /// A body could not be encoded or decoded as JSON.
    #[error("decode error: {0}")]
    Decode(String),

    /// The response decoded but lacks data the operation requires.
    #[error("data issue: {0}")]
    Data(String),

    /// Plaid answered with an error status.
    #[error("plaid returned {code}: {}", .message.as_deref().unwrap_or("no message"))]
    Api {
        /// HTTP status code.
        code: u16,
        /// Plaid's error message, if any.
        message: Option<String>,
        /// Plaid's own error code, if any.
        error_code: Option<String>,
    },
}

impl PlaidError {
    /// Helper: build a `Transport` error from any message.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport { msg: msg.into() }
    }

    /// Helper: build a `Timeout` error for a request description.
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }
}

impl From<serde_json::Error> for PlaidError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
