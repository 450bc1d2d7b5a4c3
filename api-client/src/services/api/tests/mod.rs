//! # API Client Tests
//!
//! The client runs against an in-process axum backend bound to an ephemeral
//! port. Every request the backend receives is recorded so tests can assert
//! on exactly what went over the wire.


use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::*;
use crate::config::{ApiConfig, CredentialMode, StatusPolicy};

pub const SESSION_TOKEN: &str = "HolaQueTalEstoEsUNTest";

/// A request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone, Default)]
pub struct MockState {
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    /// `/slow` answers only after this is notified
    pub release_slow: Arc<Notify>,
}

pub struct MockServer {
    pub base_url: String,
    pub state: MockState,
}

impl MockServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().clone()
    }
}

/// Observer that keeps every event for later assertions
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<RequestEvent>>,
    pub transport_errors: Mutex<Vec<(reqwest::Method, String)>>,
}

impl RequestObserver for RecordingObserver {
    fn on_response(&self, event: &RequestEvent) {
        self.events.lock().push(event.clone());
    }

    fn on_transport_error(&self, method: &reqwest::Method, path: &str, _error: &reqwest::Error) {
        self.transport_errors
            .lock()
            .push((method.clone(), path.to_string()));
    }
}

async fn record(State(state): State<MockState>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Request body should be readable in test");

    state.requests.lock().push(RecordedRequest {
        method: parts.method.to_string(),
        path: parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_default(),
        content_type: parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&bytes).into_owned(),
    });

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}

async fn ok() -> Json<Value> {
    Json(json!({ "ok": true }))
}

async fn fail() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "x" })))
}

async fn status_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

async fn plain_text() -> &'static str {
    "plain text, not json"
}

async fn html_error() -> impl IntoResponse {
    (StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>")
}

async fn items() -> Json<Value> {
    Json(json!([1, 2, 3]))
}

async fn item(Path(id): Path<u32>) -> Json<Value> {
    Json(json!({ "id": id }))
}

async fn slow(State(state): State<MockState>) -> Json<Value> {
    state.release_slow.notified().await;
    Json(json!({ "path": "/slow" }))
}

async fn fast() -> Json<Value> {
    Json(json!({ "path": "/fast" }))
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);
    let fields = ["username", "email", "password", "first_name", "last_name"];
    if fields.iter().any(|name| field(*name).is_none()) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Missing required fields" })));
    }
    if field("username").as_deref() == Some("taken") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Username already exists" })));
    }
    (
        StatusCode::CREATED,
        Json(json!({ "success": true, "message": "Registration successful" })),
    )
}

async fn login(Json(body): Json<Value>) -> Response {
    if body.get("password").and_then(Value::as_str) != Some("secret") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid credentials" })))
            .into_response();
    }
    (
        StatusCode::OK,
        [(
            header::SET_COOKIE,
            format!("token={}; HttpOnly; Path=/; SameSite=Strict", SESSION_TOKEN),
        )],
        Json(json!({ "success": true, "message": "Login successful" })),
    )
        .into_response()
}

async fn whoami(headers: HeaderMap) -> Json<Value> {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    Json(json!({ "cookie": cookie }))
}

/// Spawn the mock backend on an ephemeral port
pub async fn spawn_mock_server() -> MockServer {
    let state = MockState::default();

    let app = Router::new()
        .route("/echo", post(echo))
        .route("/login", post(echo))
        .route("/ok", post(ok))
        .route("/fail", post(fail).get(fail))
        .route("/status", get(status_not_found))
        .route("/text", get(plain_text))
        .route("/html-error", get(html_error))
        .route("/items", get(items))
        .route("/item/{id}", get(item))
        .route("/slow", get(slow))
        .route("/fast", get(fast))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/whoami", get(whoami))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener
        .local_addr()
        .expect("Mock server should have a local address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock server should run");
    });

    MockServer {
        base_url: format!("http://{}", addr),
        state,
    }
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener
        .local_addr()
        .expect("Throwaway listener should have a local address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(base_url: &str, policy: StatusPolicy, credentials: CredentialMode) -> ApiClient {
    ApiClient::new(
        ApiConfig::new(base_url)
            .with_status_policy(policy)
            .with_credentials(credentials),
    )
    .expect("Client construction should succeed in test")
}

pub fn strict_client(base_url: &str) -> ApiClient {
    client_for(base_url, StatusPolicy::Strict, CredentialMode::Include)
}

pub fn lenient_client(base_url: &str) -> ApiClient {
    client_for(base_url, StatusPolicy::Lenient, CredentialMode::Include)
}

pub fn observed(client: ApiClient) -> (ApiClient, Arc<RecordingObserver>) {
    let observer = Arc::new(RecordingObserver::default());
    (client.with_observer(observer.clone()), observer)
}
