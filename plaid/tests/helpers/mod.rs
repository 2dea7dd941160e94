#![allow(dead_code)]

// Recording transports and credentials shared by the client tests.
use std::sync::{Arc, Mutex};

use plaid::{ApiRequest, ClientConfig, PlaidClient, PlaidError, PlaidTransport, RawResponse};
use serde_json::{Value, json};

pub const CLIENT_ID: &str = "test_id";
pub const SECRET: &str = "test_secret";

/// Sandbox config with the test credentials.
pub fn sandbox() -> ClientConfig {
    ClientConfig::new(CLIENT_ID, SECRET)
}

/// Shared log of every request a recording transport saw.
pub type RequestLog = Arc<Mutex<Vec<ApiRequest>>>;

/// Transport that records requests and answers every call with `status`/`body`.
pub fn recording(status: u16, body: Value) -> (Arc<dyn PlaidTransport>, RequestLog) {
    let log: RequestLog = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    let transport = <dyn PlaidTransport>::from_fn(move |req| {
        sink.lock().unwrap().push(req);
        Ok(RawResponse::json(status, &body))
    });
    (transport, log)
}

/// Client over a recording transport that answers `200 {}`.
pub fn recording_client(cfg: ClientConfig) -> (PlaidClient, RequestLog) {
    let (transport, log) = recording(200, json!({}));
    let client = PlaidClient::builder(cfg)
        .transport(transport)
        .build()
        .expect("valid test client");
    (client, log)
}

/// Transport that fails the test if it is ever called.
pub fn unreachable_transport() -> Arc<dyn PlaidTransport> {
    <dyn PlaidTransport>::from_fn(|req| -> Result<RawResponse, PlaidError> {
        panic!("no request expected, got {}", req.operation())
    })
}

/// The only request in `log`.
pub fn single(log: &RequestLog) -> ApiRequest {
    let guard = log.lock().unwrap();
    assert_eq!(guard.len(), 1, "expected exactly one request");
    guard[0].clone()
}
