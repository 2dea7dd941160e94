//! Normalized results returned by client operations.
//!
//! Plaid's responses vary in shape with the HTTP status. Each operation maps
//! the raw status and body onto one of the types below, so callers match on
//! variants instead of digging through string-keyed maps.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PlaidError;

/// Outcome of an authentication, account or token operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthResponse {
    /// HTTP 200.
    Success(AuthSuccess),
    /// HTTP 201: the caller must answer a multi-factor challenge via `/auth/step`.
    MfaChallenge(MfaChallenge),
    /// Any other status.
    ApiError(ApiErrorResponse),
}

/// Fields extracted from a 200 response. Absent fields are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// HTTP status code (always 200).
    pub code: u16,
    /// Access token for subsequent calls.
    pub access_token: Option<String>,
    /// Account records, as returned.
    pub accounts: Option<Value>,
    /// Account holder info, as returned.
    pub info: Option<Value>,
    /// Transaction records, as returned.
    pub transactions: Option<Value>,
}

/// Fields extracted from a 201 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MfaChallenge {
    /// HTTP status code (always 201).
    pub code: u16,
    /// Challenge type, e.g. `questions`, `list` or `device`.
    #[serde(rename = "type")]
    pub mfa_type: Option<String>,
    /// Access token to send back with the answer.
    pub access_token: Option<String>,
    /// Challenge payload (body `mfa`, falling back to `mfa_info`).
    pub mfa_info: Option<Value>,
}

/// Fields extracted from an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// HTTP status code.
    pub code: u16,
    /// Human-readable message.
    pub message: Option<String>,
    /// Plaid's error code (body field `code`).
    pub error_code: Option<String>,
    /// Suggested resolution.
    pub resolve: Option<String>,
}

impl AuthResponse {
    /// HTTP status code the response was normalized from.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Success(s) => s.code,
            Self::MfaChallenge(m) => m.code,
            Self::ApiError(e) => e.code,
        }
    }

    /// Access token carried by a success or MFA response.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Success(s) => s.access_token.as_deref(),
            Self::MfaChallenge(m) => m.access_token.as_deref(),
            Self::ApiError(_) => None,
        }
    }

    /// True for a 200 response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True for a 201 response.
    #[must_use]
    pub const fn is_mfa(&self) -> bool {
        matches!(self, Self::MfaChallenge(_))
    }

    /// Turn an `ApiError` variant into `Err(PlaidError::Api)`.
    ///
    /// # Errors
    /// Returns `PlaidError::Api` when the response is an API error.
    pub fn into_result(self) -> Result<Self, PlaidError> {
        match self {
            Self::ApiError(e) => Err(PlaidError::Api {
                code: e.code,
                message: e.message,
                error_code: e.error_code,
            }),
            other => Ok(other),
        }
    }
}

/// A point of interest returned by the entity lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// HTTP status code.
    pub code: u16,
    /// Entity category.
    pub category: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Entity identifier (body field `_id`).
    pub id: Option<String>,
    /// Telephone number from `meta.contact.telephone`.
    pub phone: Option<String>,
    /// Location object from `meta.location`.
    pub location: Option<Value>,
}

/// Institutions listing, passed through unprojected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institutions {
    /// HTTP status code.
    pub code: u16,
    /// Parsed JSON body.
    pub body: Value,
}
