//! API Router
//!
//! Mounts the webhook dispatcher on every path, behind request tracing and
//! the transport body limit.

use axum::{body::Body, extract::State, http::Request, response::Response, Router};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{config::Config, webhooks::Dispatcher};

/// Create the main application router.
pub fn create_router(dispatcher: Dispatcher, config: &Config) -> Router {
    Router::new()
        .fallback(receive_webhook)
        .layer(RequestBodyLimitLayer::new(config.max_body_size))
        .layer(TraceLayer::new_for_http())
        .with_state(dispatcher)
}

/// Webhook endpoint. Any method and path reaches the dispatcher, which
/// answers non-POST requests with 405 itself.
async fn receive_webhook(State(dispatcher): State<Dispatcher>, request: Request<Body>) -> Response {
    dispatcher.handle(request).await
}
