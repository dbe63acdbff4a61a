//! GWS Server
//!
//! Receives GitHub webhooks, verifies their `X-Hub-Signature`, and republishes
//! each decoded event on a bounded per-category channel. Slow or absent
//! subscribers lose events instead of stalling the HTTP responder.

pub mod api;
pub mod config;
pub mod subscriber;
pub mod webhooks;
