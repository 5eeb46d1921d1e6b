//! In-process BookStack stand-in for integration tests.
//!
//! Serves canned responses keyed by method and path and records every request
//! it receives so tests can assert on what went over the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

use bs_api::ApiClient;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    /// Path including the query string.
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not json")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

#[derive(Clone, Default)]
struct MockState {
    routes: Arc<HashMap<(Method, String), (u16, Vec<u8>)>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

/// Builder and handle for the mock server.
#[derive(Default)]
pub struct MockServer {
    routes: HashMap<(Method, String), (u16, Vec<u8>)>,
    requests: Arc<Mutex<Vec<Recorded>>>,
    base_url: String,
}

impl MockServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` (path without query, e.g. "/api/books") with a body.
    pub fn route(mut self, method: Method, path: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .insert((method, path.to_string()), (status, body.into()));
        self
    }

    /// Answer with a JSON value.
    pub fn json(self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.route(method, path, status, body.to_string())
    }

    /// Bind to an ephemeral port and start serving.
    pub async fn start(mut self) -> Self {
        let state = MockState {
            routes: Arc::new(std::mem::take(&mut self.routes)),
            requests: self.requests.clone(),
        };
        let app = Router::new().fallback(handle).with_state(state);
        self.base_url = serve(app).await;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// A client pointed at this server with a fast rate limit.
    pub fn client(&self) -> ApiClient {
        ApiClient::builder()
            .url(self.base_url.clone())
            .token("test-id", "test-secret")
            .rate_limit(1000)
            .build()
            .expect("client builds")
    }

    /// Everything received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// The single request received, panicking if there was not exactly one.
    pub fn only_request(&self) -> Recorded {
        let mut requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests.remove(0)
    }
}

/// Serve any router on 127.0.0.1 and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock server");
    });
    format!("http://{addr}")
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    state.requests.lock().expect("requests lock").push(Recorded {
        method: method.clone(),
        uri: uri.to_string(),
        headers,
        body: body.to_vec(),
    });

    match state.routes.get(&(method, uri.path().to_string())) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            [("content-type", "application/json")],
            body.clone(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            [("content-type", "application/json")],
            br#"{"error":{"code":404,"message":"no route"}}"#.to_vec(),
        ),
    }
}
