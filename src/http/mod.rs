//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Invocation host:
//!     TCP connection
//!         → server.rs (Axum setup, body limit, timeout, tracing)
//!         → POST /invoke → edge::handle_json → JSON response
//!
//! Embedded in an Axum app:
//!     inner service response
//!         → middleware.rs (HeaderPolicyLayer applies the policy)
//!         → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::{HeaderPolicy, HeaderPolicyLayer};
pub use server::HttpServer;
