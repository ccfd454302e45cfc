//! Edge function invocation.
//!
//! # Data Flow
//! ```text
//! viewer-response event (JSON)
//!     → event.rs (deserialize, require request.uri + response.headers)
//!     → policy::apply_policy
//!     → response object (JSON) handed back to the runtime
//! ```
//!
//! # Design Decisions
//! - Malformed events fail fast; no defaults are invented for missing fields
//! - Everything besides `request.uri` and `response.headers` passes through untouched

pub mod event;

pub use event::{handle_event, handle_json, EdgeEvent, EdgeRequest, EdgeResponse, EventError};
