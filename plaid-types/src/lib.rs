//! Configuration, error, and normalized response types shared by the Plaid client crates.
#![warn(missing_docs)]

mod config;
mod error;
mod responses;

pub use config::{ClientConfig, Environment};
pub use error::PlaidError;
pub use responses::{ApiErrorResponse, AuthResponse, AuthSuccess, Institutions, MfaChallenge, Place};
