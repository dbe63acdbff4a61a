//! Webhook Dispatch
//!
//! Request pipeline: method gate, body read, optional signature check, event
//! classification, decode, non-blocking publish. Each step may end the request
//! early with a [`WebhookError`].

use std::borrow::Cow;
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error, warn};

use super::error::WebhookError;
use super::routes::{Delivery, EventStreams, RouteTable};
use super::signing;

/// Signature header (`sha1=<hex>`).
pub const SIGNATURE_HEADER: &str = "x-hub-signature";

/// Event label header (`push`, `issues`, ...).
pub const EVENT_HEADER: &str = "x-github-event";

/// Unique id GitHub assigns to each delivery. Only used for logging.
pub const DELIVERY_HEADER: &str = "x-github-delivery";

/// Receives webhook requests and fans decoded events out to [`EventStreams`].
///
/// Cloning is cheap; all clones share the same channels.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatcherInner>,
}

struct DispatcherInner {
    secret: Vec<u8>,
    routes: RouteTable,
}

impl Dispatcher {
    /// Create a dispatcher and the receivers for every event category.
    ///
    /// An empty `secret` turns signature verification off.
    pub fn new(secret: impl Into<Vec<u8>>) -> (Self, EventStreams) {
        let (routes, streams) = RouteTable::new();
        let dispatcher = Self {
            inner: Arc::new(DispatcherInner {
                secret: secret.into(),
                routes,
            }),
        };
        (dispatcher, streams)
    }

    /// Whether requests must carry a valid `X-Hub-Signature`.
    pub fn verifies_signatures(&self) -> bool {
        !self.inner.secret.is_empty()
    }

    /// Labels with a typed delivery channel.
    pub fn known_events(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.inner.routes.labels()
    }

    /// Handle one webhook request. Never blocks on subscribers.
    pub async fn handle(&self, request: Request<Body>) -> Response {
        match self.process(request).await {
            Ok(()) => StatusCode::OK.into_response(),
            Err(err) => err.into_response(),
        }
    }

    async fn process(&self, request: Request<Body>) -> Result<(), WebhookError> {
        let (parts, body) = request.into_parts();

        if parts.method != Method::POST {
            return Err(WebhookError::MethodNotAllowed(parts.method));
        }

        let delivery = header_label(&parts.headers, DELIVERY_HEADER);
        let delivery_id = delivery.as_deref().unwrap_or("-");

        let body = body::to_bytes(body, usize::MAX).await.map_err(|e| {
            error!(delivery = delivery_id, error = %e, "Failed to read webhook body");
            WebhookError::BodyRead(e)
        })?;

        if self.verifies_signatures() {
            let signature = parts
                .headers
                .get(SIGNATURE_HEADER)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    warn!(delivery = delivery_id, "Rejected webhook without signature");
                    WebhookError::MissingSignature
                })?;

            if !signing::verify_signature(&self.inner.secret, &body, signature.as_bytes()) {
                warn!(
                    delivery = delivery_id,
                    "Rejected webhook with invalid signature"
                );
                return Err(WebhookError::SignatureMismatch);
            }
        }

        let label =
            header_label(&parts.headers, EVENT_HEADER).ok_or(WebhookError::MissingEventType)?;
        let event: &str = &label;

        let outcome = self
            .inner
            .routes
            .resolve(event)
            .publish(event, &body)
            .map_err(|source| {
                warn!(
                    delivery = delivery_id,
                    event,
                    error = %source,
                    "Could not decode webhook payload"
                );
                WebhookError::Decode {
                    event: event.to_owned(),
                    source,
                }
            })?;

        match outcome {
            Delivery::Delivered => {
                debug!(delivery = delivery_id, event, "Webhook event delivered");
            }
            Delivery::Full | Delivery::Closed => {
                debug!(
                    delivery = delivery_id,
                    event,
                    reason = outcome.as_str(),
                    "Webhook event dropped"
                );
            }
        }

        Ok(())
    }
}

/// Non-empty header value as text. Any present value is kept, non-ASCII and
/// invalid UTF-8 included, so unusual labels still reach the fallback route.
fn header_label<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    headers
        .get(name)
        .filter(|v| !v.is_empty())
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
}
