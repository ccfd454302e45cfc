//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! policy, edge, http
//!     → tracing events (structured fields: uri, class, header)
//!     → logging.rs subscriber (pretty or JSON to stderr)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;
