//! plaid-core
//!
//! Transport seam and response normalization shared by the Plaid client crates.
//!
//! - `transport`: the `PlaidTransport` trait plus the request/response values
//!   that cross it.
//! - `normalize`: functions mapping a raw status and body onto the typed
//!   results in `plaid_types`.
#![warn(missing_docs)]

/// Status-code dispatch and field extraction for raw responses.
pub mod normalize;
/// Request/response values and the `PlaidTransport` trait.
pub mod transport;

pub use normalize::{parse_institutions, parse_place, parse_response};
pub use transport::{ApiRequest, HttpMethod, PlaidTransport, RawResponse};

pub use plaid_types::{
    ApiErrorResponse, AuthResponse, AuthSuccess, ClientConfig, Environment, Institutions,
    MfaChallenge, Place, PlaidError,
};
