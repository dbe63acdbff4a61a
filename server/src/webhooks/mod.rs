//! GitHub Webhook Ingestion
//!
//! Signature verification, event routing and non-blocking delivery of decoded
//! events to per-category channels.

pub mod dispatch;
pub mod error;
pub mod routes;
pub mod signing;

pub use dispatch::Dispatcher;
pub use error::WebhookError;
pub use routes::{Delivery, EventStreams};
