//! Response header policy.
//!
//! # Data Flow
//! ```text
//! (request URI, response headers)
//!     → security.rs (fixed security headers, CSP, permissions policy)
//!     → cache.rs (classify URI suffix → cache-control)
//!     → engine.rs (strip server / x-powered-by, last)
//!     → mutated response headers
//! ```
//!
//! # Design Decisions
//! - Every step overwrites or deletes, so applying the policy twice is a no-op
//! - Suffix matching is literal and case-sensitive (`/a.js?v=2` is not an asset)
//! - Policy tables are `'static`; nothing survives between calls

pub mod cache;
pub mod engine;
pub mod headers;
pub mod security;

pub use cache::{classify, CacheClass};
pub use engine::{apply_policy, PolicyTarget};
pub use headers::{HeaderEntry, HeaderMapping};
