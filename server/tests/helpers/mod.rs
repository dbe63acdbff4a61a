//! Reusable test helpers for HTTP integration tests.
//!
//! Provides `TestApp` for sending requests through the full axum router while
//! holding the receiving end of every delivery channel.
//!
//! ## Fixtures
//!
//! Files under `tests/fixtures/` hold one delivery each:
//! `{ "event": ..., "signature": ..., "payload": ... }`. Every key is
//! optional; `payload` is sent byte-for-byte as written.
//!
//! ## Test Servers
//!
//! Use [`spawn_test_server()`] when a test needs a real socket instead of
//! `tower::ServiceExt::oneshot`.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{self, Method, Request, Response};
use axum::Router;
use gws_server::api::create_router;
use gws_server::config::Config;
use gws_server::webhooks::{Dispatcher, EventStreams};
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::value::RawValue;
use tokio::task::JoinHandle;
use tower::ServiceExt;

/// Secret used by [`TestApp::new`] and by the pre-signed fixtures.
pub const TEST_SECRET: &str = "test-secret";

// ============================================================================
// Test App
// ============================================================================

/// A test application wrapping the full axum router.
pub struct TestApp {
    pub router: Router,
    pub streams: EventStreams,
    pub config: Config,
}

impl TestApp {
    /// Create a test app that verifies signatures with [`TEST_SECRET`].
    pub fn new() -> Self {
        Self::with_config(Config::default_for_test())
    }

    /// Create a test app that accepts unsigned deliveries.
    pub fn unsigned() -> Self {
        Self::with_config(Config {
            webhook_secret: String::new(),
            ..Config::default_for_test()
        })
    }

    /// Create a test app with a custom config.
    pub fn with_config(config: Config) -> Self {
        let (dispatcher, streams) = Dispatcher::new(config.webhook_secret.as_bytes());
        let router = create_router(dispatcher, &config);

        Self {
            router,
            streams,
            config,
        }
    }

    /// Build an HTTP request with the given method and URI.
    pub fn request(method: Method, uri: &str) -> http::request::Builder {
        Request::builder().method(method).uri(uri)
    }

    /// Send a request through the router via `tower::ServiceExt::oneshot`.
    pub async fn oneshot(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("oneshot request failed")
    }

    /// Send a fixture delivery as `POST /`.
    pub async fn post_fixture(&self, name: &str) -> Response<Body> {
        self.oneshot(load_fixture(name).into_request("/")).await
    }
}

/// Collect a response body as UTF-8.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}

// ============================================================================
// Fixtures
// ============================================================================

/// One recorded delivery.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub event: Option<String>,
    pub signature: Option<String>,
    pub payload: Option<Box<RawValue>>,
}

impl Fixture {
    /// Raw payload bytes, exactly as they appear in the fixture file.
    pub fn body(&self) -> Vec<u8> {
        self.payload
            .as_ref()
            .map(|raw| raw.get().as_bytes().to_vec())
            .unwrap_or_default()
    }

    /// Build a POST request carrying the fixture's headers and payload.
    pub fn into_request(self, uri: &str) -> Request<Body> {
        let body = self.body();
        let mut builder = TestApp::request(Method::POST, uri);
        if let Some(event) = self.event {
            builder = builder.header("X-GitHub-Event", event);
        }
        if let Some(signature) = self.signature {
            builder = builder.header("X-Hub-Signature", signature);
        }
        builder
            .body(Body::from(body))
            .expect("Failed to build request")
    }
}

/// Load `tests/fixtures/<name>.json`.
pub fn load_fixture(name: &str) -> Fixture {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    let data = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&data)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {e}", path.display()))
}

// ============================================================================
// Test Server
// ============================================================================

/// A running test server bound to a random port.
pub struct TestServer {
    /// Server address (127.0.0.1:PORT).
    pub addr: SocketAddr,
    /// Base URL for HTTP requests (e.g., `http://127.0.0.1:12345`).
    pub url: String,
    /// Handle to the server task for cleanup.
    _handle: JoinHandle<()>,
}

/// Spawn a real HTTP server on a random port.
pub async fn spawn_test_server(router: Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    TestServer {
        addr,
        url,
        _handle: handle,
    }
}
