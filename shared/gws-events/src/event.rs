//! Generic Event
//!
//! Catch-all payload for labels without a dedicated type.

use serde::{Deserialize, Serialize};

/// An event whose label has no typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// The `X-GitHub-Event` label (e.g. `"ping"`, `"release"`).
    pub name: String,
    /// The decoded JSON body.
    pub payload: serde_json::Value,
}

impl Event {
    /// Decode a raw body as an untyped event. Any valid JSON is accepted.
    pub fn from_slice(name: &str, body: &[u8]) -> serde_json::Result<Self> {
        Ok(Self {
            name: name.to_owned(),
            payload: serde_json::from_slice(body)?,
        })
    }

    /// Action field shared by most GitHub payloads, if present.
    pub fn action(&self) -> Option<&str> {
        self.payload
            .get("action")
            .and_then(serde_json::Value::as_str)
    }

    /// `full_name` of the repository the event belongs to, if present.
    pub fn repository(&self) -> Option<&str> {
        self.payload
            .get("repository")
            .and_then(|repo| repo.get("full_name"))
            .and_then(serde_json::Value::as_str)
    }
}
