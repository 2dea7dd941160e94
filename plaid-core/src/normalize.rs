use serde_json::Value;

use crate::transport::RawResponse;
use crate::{
    ApiErrorResponse, AuthResponse, AuthSuccess, Institutions, MfaChallenge, Place, PlaidError,
};

const STATUS_OK: u16 = 200;
const STATUS_MFA: u16 = 201;

fn decode(raw: &RawResponse) -> Result<Value, PlaidError> {
    serde_json::from_str(&raw.body)
        .map_err(|e| PlaidError::Decode(format!("status {} body: {e}", raw.status)))
}

/// Non-null value at `key`.
fn value_field(body: &Value, key: &str) -> Option<Value> {
    body.get(key).filter(|v| !v.is_null()).cloned()
}

/// Scalar at `key` rendered as a string. Plaid mixes numeric and string codes.
fn string_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Normalize an auth/account/token response by HTTP status.
///
/// - `200` yields `Success` with `access_token`, `accounts`, `info` and
///   `transactions`; missing fields are `None`.
/// - `201` yields `MfaChallenge`; `mfa_info` comes from `mfa`, else `mfa_info`.
/// - Anything else yields `ApiError` with `message`, `error_code` (body `code`)
///   and `resolve`.
///
/// # Errors
/// Returns `PlaidError::Decode` if a 200 or 201 body is not JSON. Error bodies
/// that fail to decode still produce an `ApiError`, with empty fields.
pub fn parse_response(raw: &RawResponse) -> Result<AuthResponse, PlaidError> {
    match raw.status {
        STATUS_OK => {
            let body = decode(raw)?;
            Ok(AuthResponse::Success(AuthSuccess {
                code: raw.status,
                access_token: string_field(&body, "access_token"),
                accounts: value_field(&body, "accounts"),
                info: value_field(&body, "info"),
                transactions: value_field(&body, "transactions"),
            }))
        }
        STATUS_MFA => {
            let body = decode(raw)?;
            Ok(AuthResponse::MfaChallenge(MfaChallenge {
                code: raw.status,
                mfa_type: string_field(&body, "type"),
                access_token: string_field(&body, "access_token"),
                mfa_info: value_field(&body, "mfa")
                    .or_else(|| value_field(&body, "mfa_info")),
            }))
        }
        status => {
            let body = decode(raw).unwrap_or_else(|_e| {
                #[cfg(feature = "tracing")]
                tracing::debug!(status, error = %_e, "error body is not JSON");
                Value::Null
            });
            Ok(AuthResponse::ApiError(ApiErrorResponse {
                code: status,
                message: string_field(&body, "message"),
                error_code: string_field(&body, "code"),
                resolve: string_field(&body, "resolve"),
            }))
        }
    }
}

/// Normalize an `/entity` response into a `Place`.
///
/// The nested `meta.contact.telephone` and `meta.location` paths are optional.
///
/// # Errors
/// Returns `PlaidError::Decode` for a non-JSON body and `PlaidError::Data` when
/// the body has no `entity` object.
pub fn parse_place(raw: &RawResponse) -> Result<Place, PlaidError> {
    let body = decode(raw)?;
    let entity = body
        .get("entity")
        .filter(|e| e.is_object())
        .ok_or_else(|| {
            PlaidError::Data(format!(
                "entity object missing from response (status {})",
                raw.status
            ))
        })?;
    let meta = entity.get("meta");

    Ok(Place {
        code: raw.status,
        category: string_field(entity, "category"),
        name: string_field(entity, "name"),
        id: string_field(entity, "_id"),
        phone: meta
            .and_then(|m| m.get("contact"))
            .and_then(|c| string_field(c, "telephone")),
        location: meta.and_then(|m| value_field(m, "location")),
    })
}

/// Wrap an `/institutions` response without projecting fields.
///
/// # Errors
/// Returns `PlaidError::Decode` for a non-JSON body.
pub fn parse_institutions(raw: &RawResponse) -> Result<Institutions, PlaidError> {
    Ok(Institutions {
        code: raw.status,
        body: decode(raw)?,
    })
}
