//! JSON request bodies. Optional fields are omitted, never sent as `null`.

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `/auth` and `/connect`.
#[derive(Serialize)]
pub struct AuthPayload<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
    #[serde(rename = "type")]
    pub auth_type: &'a str,
    pub credentials: Credentials<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

/// `/auth/step`.
#[derive(Serialize)]
pub struct StepPayload<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
    #[serde(rename = "type")]
    pub auth_type: &'a str,
    pub access_token: &'a str,
    pub mfa: &'a Value,
}

/// `/{resource}/get`.
#[derive(Serialize)]
pub struct TokenPayload<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
    pub access_token: &'a str,
}

/// `/upgrade`.
#[derive(Serialize)]
pub struct UpgradePayload<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
    pub access_token: &'a str,
    pub upgrade_to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a Value>,
}

/// `/exchange_token`.
#[derive(Serialize)]
pub struct ExchangePayload<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
    pub public_token: &'a str,
}
