//! In-memory `PlaidTransport` for tests and offline examples.
//!
//! Behaviors are scripted per `(method, path)` through a controller handle, and
//! every request the transport receives is logged for later inspection.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use plaid_core::{ApiRequest, HttpMethod, PlaidError, PlaidTransport, RawResponse};
use serde_json::{Value, json};
use tokio::sync::Mutex;

/// Canned Plaid sandbox responses.
pub mod fixtures;

/// Instruction for how the transport should answer a route.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer with this response.
    Respond(RawResponse),
    /// Fail at the transport level with this error.
    Fail(PlaidError),
    /// Never answer (simulate a stalled connection).
    Hang,
}

impl MockBehavior {
    /// Answer with `status` and `body` serialized as JSON.
    #[must_use]
    pub fn json(status: u16, body: &Value) -> Self {
        Self::Respond(RawResponse::json(status, body))
    }
}

type Route = (HttpMethod, String);

#[derive(Default)]
struct InternalState {
    rules: HashMap<Route, MockBehavior>,
    requests: Vec<ApiRequest>,
}

/// Controller handle used by tests to drive the mock transport from the outside.
pub struct MockController {
    state: Arc<Mutex<InternalState>>,
}

impl MockController {
    /// Set the behavior for requests matching `method` and `path`.
    pub async fn set_behavior(&self, method: HttpMethod, path: &str, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((method, path.to_string()), behavior);
    }

    /// Shorthand for a JSON response on `method` `path`.
    pub async fn respond_json(&self, method: HttpMethod, path: &str, status: u16, body: Value) {
        self.set_behavior(method, path, MockBehavior::json(status, &body))
            .await;
    }

    /// Return a copy of every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Most recent request, if any.
    pub async fn last_request(&self) -> Option<ApiRequest> {
        self.state.lock().await.requests.last().cloned()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A transport that defers all behavior to an external controller.
///
/// Unscripted routes answer 404 with a Plaid-shaped error body.
pub struct MockTransport {
    state: Arc<Mutex<InternalState>>,
}

impl MockTransport {
    /// Create a new mock transport and its controller.
    #[must_use]
    pub fn new_with_controller() -> (Arc<dyn PlaidTransport>, MockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = MockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { state });
        (me as Arc<dyn PlaidTransport>, controller)
    }

    fn unscripted(request: &ApiRequest) -> RawResponse {
        RawResponse::json(
            404,
            &json!({
                "code": 404,
                "message": format!("no mock behavior for {}", request.operation()),
                "resolve": "script the route with MockController::set_behavior",
            }),
        )
    }
}

#[async_trait]
impl PlaidTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, PlaidError> {
        // Log and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            let behavior = guard
                .rules
                .get(&(request.method, request.path.clone()))
                .cloned();
            guard.requests.push(request.clone());
            behavior
        };

        match behavior {
            Some(MockBehavior::Respond(raw)) => Ok(raw),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(Self::unscripted(&request)),
        }
    }
}
