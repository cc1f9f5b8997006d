//! Shared test helpers for integration tests
//!
//! A fake backend (axum on a loopback port) that answers canned JSON and
//! records every request it sees, plus an assert_cmd helper wired to it.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_cmd::cargo;
use assert_cmd::Command;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;

/// Helper to get a stockroom command
pub fn stockroom() -> Command {
    Command::new(cargo::cargo_bin!("stockroom"))
}

/// One request seen by the fake backend
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
struct Route {
    method: Method,
    path: String,
    status: StatusCode,
    body: Value,
}

#[derive(Debug, Default)]
struct Inner {
    routes: Vec<Route>,
    requests: Vec<Recorded>,
    delay: Option<Duration>,
}

type Shared = Arc<Mutex<Inner>>;

/// Loopback HTTP server standing in for the shop backend
pub struct FakeBackend {
    pub base_url: String,
    inner: Shared,
    // Keeps the server alive for sync (assert_cmd) tests
    runtime: Option<tokio::runtime::Runtime>,
}

impl FakeBackend {
    /// Start on a private runtime, for tests that are not async
    pub fn start() -> Self {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let inner = Shared::default();
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
        runtime.spawn(serve(listener, inner.clone()));
        Self {
            base_url,
            inner,
            runtime: Some(runtime),
        }
    }

    /// Start on the current runtime, for `#[tokio::test]`s
    pub async fn spawn() -> Self {
        let inner = Shared::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
        tokio::spawn(serve(listener, inner.clone()));
        Self {
            base_url,
            inner,
            runtime: None,
        }
    }

    /// Answer `method path` (path without the `/api/v1` prefix) with `body`
    pub fn route(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.inner.lock().unwrap().routes.push(Route {
            method,
            path: path.trim_start_matches('/').to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            body,
        });
        self
    }

    /// Hold every later response for `delay` before answering
    pub fn set_delay(&self, delay: Duration) {
        self.inner.lock().unwrap().delay = Some(delay);
    }

    /// Every request so far, oldest first
    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Requests with `method` to `path`
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }
}

async fn serve(listener: tokio::net::TcpListener, inner: Shared) {
    let app = Router::new().fallback(handle).with_state(inner);
    axum::serve(listener, app).await.unwrap();
}

async fn handle(State(inner): State<Shared>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri
        .path()
        .trim_start_matches("/api/v1")
        .trim_start_matches('/')
        .to_string();
    let (route, delay) = {
        let mut inner = inner.lock().unwrap();
        inner.requests.push(Recorded {
            method: method.clone(),
            path: path.clone(),
            query: uri.query().unwrap_or_default().to_string(),
            body: serde_json::from_slice(&body).ok(),
        });
        let route = inner
            .routes
            .iter()
            .find(|r| r.method == method && r.path == path)
            .cloned();
        (route, inner.delay)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    match route {
        Some(route) => (
            route.status,
            [(header::CONTENT_TYPE, "application/json")],
            route.body.to_string(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            serde_json::json!({"message": format!("no route for {} /{}", method, path)}).to_string(),
        )
            .into_response(),
    }
}

/// A stockroom command pointed at `backend`, with its own config file
pub fn stockroom_against(backend: &FakeBackend, config_dir: &TempDir) -> Command {
    let mut cmd = stockroom();
    cmd.env_remove("STOCKROOM_TOKEN")
        .env_remove("STOCKROOM_SERVER")
        .env_remove("STOCKROOM_PASSWORD")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .arg("--server")
        .arg(&backend.base_url);
    cmd
}

/// Paged list envelope as the backend sends it
pub fn paged(content: Value, total_pages: u32) -> Value {
    serde_json::json!({ "data": { "content": content, "totalPages": total_pages } })
}
