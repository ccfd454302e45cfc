//! Edge response header policy.
//!
//! Rewrites outgoing response headers at a CDN edge: attaches a fixed set of
//! security headers, picks `cache-control` from the request URI suffix, and
//! strips headers that reveal the origin's software.
//!
//! # Architecture Overview
//!
//! ```text
//!   viewer-response event ──▶ edge ──┐
//!                                    ├──▶ policy ──▶ mutated headers
//!   axum response ──▶ http::middleware┘
//!
//!   http::server  (local invocation host, POST /invoke)
//!   config, observability, lifecycle  (host process concerns)
//! ```

// Core
pub mod edge;
pub mod policy;

// Hosting
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::EdgeConfig;
pub use edge::{handle_event, handle_json, EdgeEvent, EdgeResponse};
pub use http::{HeaderPolicyLayer, HttpServer};
pub use lifecycle::Shutdown;
pub use policy::{apply_policy, classify, CacheClass, HeaderMapping};
