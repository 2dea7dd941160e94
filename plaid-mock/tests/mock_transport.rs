use std::time::Duration;

use plaid_core::{ApiRequest, AuthResponse, HttpMethod, PlaidError, parse_response};
use plaid_mock::{MockBehavior, MockTransport, fixtures};
use serde_json::json;

const BASE: &str = "https://tartan.plaid.com";

#[tokio::test]
async fn scripted_route_returns_response() {
    let (transport, controller) = MockTransport::new_with_controller();
    controller
        .respond_json(HttpMethod::Post, "/auth", 200, fixtures::auth_success())
        .await;

    let raw = transport
        .execute(ApiRequest::post(BASE, "/auth", json!({})))
        .await
        .expect("scripted response");
    assert_eq!(raw.status, 200);
    let parsed = parse_response(&raw).unwrap();
    assert_eq!(parsed.access_token(), Some(fixtures::SANDBOX_ACCESS_TOKEN));
}

#[tokio::test]
async fn routes_are_keyed_by_method_and_path() {
    let (transport, controller) = MockTransport::new_with_controller();
    controller
        .respond_json(
            HttpMethod::Get,
            "/institutions",
            200,
            fixtures::institutions(),
        )
        .await;

    let raw = transport
        .execute(ApiRequest::post(BASE, "/institutions", json!({})))
        .await
        .unwrap();
    assert_eq!(raw.status, 404);
    let AuthResponse::ApiError(e) = parse_response(&raw).unwrap() else {
        panic!("expected api error");
    };
    assert!(e.message.unwrap_or_default().contains("POST /institutions"));
}

#[tokio::test]
async fn fail_behavior_surfaces_transport_error() {
    let (transport, controller) = MockTransport::new_with_controller();
    let err = PlaidError::transport("connection refused");
    controller
        .set_behavior(HttpMethod::Post, "/connect", MockBehavior::Fail(err.clone()))
        .await;

    let got = transport
        .execute(ApiRequest::post(BASE, "/connect", json!({})))
        .await
        .expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn hang_behavior_never_completes() {
    let (transport, controller) = MockTransport::new_with_controller();
    controller
        .set_behavior(HttpMethod::Get, "/entity", MockBehavior::Hang)
        .await;

    let request = ApiRequest::get(BASE, "/entity", &[("entity_id", "x")]);
    let res = tokio::time::timeout(Duration::from_millis(50), transport.execute(request)).await;
    assert!(res.is_err());
}

#[tokio::test]
async fn requests_are_logged_in_order_and_cleared() {
    let (transport, controller) = MockTransport::new_with_controller();
    transport
        .execute(ApiRequest::post(BASE, "/auth", json!({"type":"wells"})))
        .await
        .unwrap();
    transport
        .execute(ApiRequest::get(BASE, "/entity", &[("entity_id", "abc")]))
        .await
        .unwrap();

    let log = controller.requests().await;
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].path, "/auth");
    assert_eq!(log[0].body, Some(json!({"type":"wells"})));
    let last = controller.last_request().await.expect("logged");
    assert_eq!(last.query_param("entity_id"), Some("abc"));

    controller.clear_all_behaviors().await;
    assert!(controller.requests().await.is_empty());
}
