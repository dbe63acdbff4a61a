//! Webhook Errors
//!
//! Every early exit of the dispatch pipeline, rendered as a plain-text
//! `<reason phrase>: <detail>\n` response.

use axum::http::header::{HeaderValue, CONTENT_TYPE, X_CONTENT_TYPE_OPTIONS};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Reasons a delivery is rejected.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("method not allowed: {0}")]
    MethodNotAllowed(Method),

    /// The client went away or the transport failed mid-body.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("missing signature header")]
    MissingSignature,

    #[error("signature does not match payload")]
    SignatureMismatch,

    #[error("missing event type header")]
    MissingEventType,

    #[error("could not decode {event} payload: {source}")]
    Decode {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WebhookError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingSignature | Self::SignatureMismatch => StatusCode::FORBIDDEN,
            Self::MissingEventType => StatusCode::BAD_REQUEST,
            Self::BodyRead(_) | Self::Decode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail text sent to the client. Internal causes are never exposed.
    pub fn detail(&self) -> &str {
        match self {
            Self::MethodNotAllowed(method) => method.as_str(),
            Self::BodyRead(_) => "",
            Self::MissingSignature => "Missing X-Hub-Signature",
            Self::SignatureMismatch => "HMAC verification failed",
            Self::MissingEventType => "Missing X-GitHub-Event Header",
            Self::Decode { .. } => "Could not decode body",
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        let status = self.status();
        plain_text_error(status, self.detail())
    }
}

/// Build a `<reason phrase>: <detail>\n` response. The colon and space are
/// kept even when `detail` is empty.
pub fn plain_text_error(status: StatusCode, detail: &str) -> Response {
    let reason = status.canonical_reason().unwrap_or("");
    let mut response = (status, format!("{reason}: {detail}\n")).into_response();
    let headers = response.headers_mut();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    response
}
