//! Payload Types
//!
//! Every field is optional: GitHub omits or nulls fields depending on the
//! action, and unknown fields are ignored. A field present with the wrong JSON
//! type is still a decode error.

pub mod common;
pub mod issues;
pub mod pull_request;
pub mod push;

pub use common::*;
pub use issues::*;
pub use pull_request::*;
pub use push::*;
