use std::time::Duration;

use httpmock::prelude::*;
use plaid::{AuthResponse, ClientConfig, PlaidClient, PlaidError};
use serde_json::json;

fn client_for(server: &MockServer) -> PlaidClient {
    PlaidClient::builder(ClientConfig::new("test_id", "test_secret"))
        .base_url(server.base_url())
        .build()
        .expect("valid test client")
}

#[tokio::test]
async fn authenticate_round_trip_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth")
                .header("content-type", "application/json")
                .json_body(json!({
                    "client_id": "test_id",
                    "secret": "test_secret",
                    "type": "wells",
                    "credentials": {"username": "plaid_test", "password": "plaid_good"}
                }));
            then.status(200).json_body(json!({
                "access_token": "test_wells",
                "accounts": [{"_id": "acc"}]
            }));
        })
        .await;

    let resp = client_for(&server)
        .authenticate("wells", "plaid_test", "plaid_good")
        .await
        .unwrap();

    mock.assert_async().await;
    let AuthResponse::Success(ok) = resp else {
        panic!("expected success");
    };
    assert_eq!(ok.code, 200);
    assert_eq!(ok.access_token.as_deref(), Some("test_wells"));
    assert_eq!(ok.accounts, Some(json!([{"_id": "acc"}])));
    assert_eq!(ok.transactions, None);
}

#[tokio::test]
async fn error_status_is_normalized_not_raised() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/connect");
            then.status(400)
                .json_body(json!({"message": "bad", "code": "INVALID", "resolve": "fix it"}));
        })
        .await;

    let resp = client_for(&server)
        .add_account("wells", "u", "p", None)
        .await
        .unwrap();
    let AuthResponse::ApiError(e) = resp else {
        panic!("expected api error");
    };
    assert_eq!(e.code, 400);
    assert_eq!(e.message.as_deref(), Some("bad"));
    assert_eq!(e.error_code.as_deref(), Some("INVALID"));
    assert_eq!(e.resolve.as_deref(), Some("fix it"));
}

#[tokio::test]
async fn get_place_sends_query_string() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/entity")
                .query_param("entity_id", "x");
            then.status(200).json_body(json!({
                "entity": {
                    "_id": "x",
                    "category": "food",
                    "name": "Cafe",
                    "meta": {"contact": {"telephone": "555"}, "location": {"lat": 1, "lng": 2}}
                }
            }));
        })
        .await;

    let place = client_for(&server).get_place("x").await.unwrap();

    mock.assert_async().await;
    assert_eq!(place.code, 200);
    assert_eq!(place.id.as_deref(), Some("x"));
    assert_eq!(place.phone.as_deref(), Some("555"));
    assert_eq!(place.location, Some(json!({"lat": 1, "lng": 2})));
}

#[tokio::test]
async fn institutions_pass_through_over_http() {
    let server = MockServer::start_async().await;
    let body = json!([{"id": "1", "name": "Wells Fargo", "type": "wells"}]);
    let expected = body.clone();
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/institutions");
            then.status(200).json_body(body);
        })
        .await;

    let inst = client_for(&server).get_institutions().await.unwrap();
    assert_eq!(inst.body, expected);
}

#[tokio::test]
async fn slow_server_maps_to_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/exchange_token");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(json!({"access_token": "late"}));
        })
        .await;

    let client = PlaidClient::builder(ClientConfig::new("test_id", "test_secret"))
        .base_url(server.base_url())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.exchange("pub").await.unwrap_err();
    assert!(
        matches!(err, PlaidError::Timeout { ref operation } if operation == "POST /exchange_token"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let client = PlaidClient::builder(ClientConfig::new("test_id", "test_secret"))
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.get_institutions().await.unwrap_err();
    assert!(
        matches!(err, PlaidError::Transport { .. } | PlaidError::Timeout { .. }),
        "got {err:?}"
    );
}
