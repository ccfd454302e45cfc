//! Header policy engine.
//!
//! # Responsibilities
//! - Set the fixed security headers, overwriting existing values
//! - Set `cache-control` from the URI classification
//! - Delete `server` and `x-powered-by`
//!
//! The engine never fails: every `&str` is a valid URI here and unknown
//! suffixes fall through to the default cache bucket.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use crate::policy::cache::classify;
use crate::policy::headers::HeaderMapping;
use crate::policy::security::{SECURITY_HEADERS, SUPPRESSED_HEADERS};

/// A header collection the policy can be applied to.
pub trait PolicyTarget {
    /// Set `name` to `value`, replacing every existing value.
    fn set_header(&mut self, name: &'static str, value: &'static str);

    /// Remove `name` entirely. Returns true if it was present.
    fn remove_header(&mut self, name: &'static str) -> bool;
}

impl PolicyTarget for HeaderMapping {
    fn set_header(&mut self, name: &'static str, value: &'static str) {
        self.insert(name, value);
    }

    fn remove_header(&mut self, name: &'static str) -> bool {
        self.remove(name).is_some()
    }
}

impl PolicyTarget for HeaderMap {
    fn set_header(&mut self, name: &'static str, value: &'static str) {
        self.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    fn remove_header(&mut self, name: &'static str) -> bool {
        self.remove(name).is_some()
    }
}

/// Apply the response header policy for a request to `uri`.
pub fn apply_policy<T: PolicyTarget + ?Sized>(uri: &str, headers: &mut T) {
    for (name, value) in SECURITY_HEADERS {
        headers.set_header(name, value);
    }

    let class = classify(uri);
    headers.set_header("cache-control", class.cache_control());
    tracing::debug!(uri = %uri, class = ?class, "Cache policy selected");

    // Suppression runs last so nothing above can reintroduce these.
    for name in SUPPRESSED_HEADERS {
        if headers.remove_header(name) {
            tracing::debug!(header = name, "Stripped implementation header");
        }
    }
}
