//! GWS Event Types
//!
//! Typed GitHub webhook payloads shared by the dispatch server and anything
//! that subscribes to its delivery channels.

pub mod category;
pub mod event;
pub mod types;

pub use category::EventCategory;
pub use event::Event;
pub use types::*;
