//! Response bodies modeled on the Plaid sandbox ("tartan") environment.

use serde_json::{Value, json};

/// Sandbox username that always authenticates.
pub const SANDBOX_USERNAME: &str = "plaid_test";
/// Sandbox password that always authenticates.
pub const SANDBOX_PASSWORD: &str = "plaid_good";
/// Access token issued by the sandbox for a linked test account.
pub const SANDBOX_ACCESS_TOKEN: &str = "test_wells";

/// 200 body for `/auth`, `/connect` and `/{resource}/get`.
#[must_use]
pub fn auth_success() -> Value {
    json!({
        "access_token": SANDBOX_ACCESS_TOKEN,
        "accounts": [
            {
                "_id": "QPO8Jo8vdDHMepg41PBwckXm4KdK1yUdmXOwK",
                "_item": "KdDjmojBERUKx3JkDd9RuxA5EvejA4SENO4AA",
                "_user": "eJXpMzpR65FP4RYno6rzuA7OZjd9n3Hna0RYa",
                "balance": {"available": 1203.42, "current": 1274.93},
                "meta": {"name": "Plaid Savings", "number": "9606"},
                "numbers": {"routing": "021000021", "account": "9900009606"},
                "type": "depository"
            }
        ],
        "transactions": []
    })
}

/// 201 body for a question-based MFA challenge.
#[must_use]
pub fn mfa_questions() -> Value {
    json!({
        "type": "questions",
        "access_token": SANDBOX_ACCESS_TOKEN,
        "mfa": [{"question": "You say tomato, I say...?"}]
    })
}

/// 201 body for a device-code MFA challenge using the older `mfa_info` key.
#[must_use]
pub fn mfa_device() -> Value {
    json!({
        "type": "device",
        "access_token": SANDBOX_ACCESS_TOKEN,
        "mfa_info": {"message": "Code sent to t..t@plaid.com"}
    })
}

/// 402 body for rejected credentials.
#[must_use]
pub fn invalid_credentials() -> Value {
    json!({
        "code": 1200,
        "message": "invalid credentials",
        "resolve": "The username or password provided were not correct."
    })
}

/// 200 body for `/entity`.
#[must_use]
pub fn place() -> Value {
    json!({
        "entity": {
            "_id": "52e31d1e47a0d1d22200001f",
            "category": "Food and Drink",
            "name": "Blue Bottle Coffee",
            "meta": {
                "contact": {"telephone": "(510) 653-3394"},
                "location": {
                    "address": "300 Webster St",
                    "city": "Oakland",
                    "state": "CA",
                    "coordinates": {"lat": 37.7961, "lng": -122.2760}
                }
            }
        }
    })
}

/// 200 body for `/institutions`.
#[must_use]
pub fn institutions() -> Value {
    json!([
        {
            "id": "5301a93ac140de84910000e0",
            "name": "Bank of America",
            "type": "bofa",
            "has_mfa": true,
            "products": ["connect", "auth", "balance"]
        },
        {
            "id": "5301a9d704977c52b60000db",
            "name": "Wells Fargo",
            "type": "wells",
            "has_mfa": false,
            "products": ["connect", "auth", "balance", "info"]
        }
    ])
}
