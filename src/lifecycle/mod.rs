//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight invocations → Exit
//! ```
//!
//! # Design Decisions
//! - Ctrl+C and an explicit trigger both end the server
//! - Tests drive shutdown through the broadcast handle

pub mod shutdown;

pub use shutdown::{shutdown_signal, Shutdown};
