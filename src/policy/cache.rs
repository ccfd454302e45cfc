//! Cache-control selection by URI suffix.
//!
//! # Design Decisions
//! - Match against the raw URI string, query and fragment included
//! - Case-sensitive: `/logo.PNG` is not a static asset
//! - First bucket wins: static assets, then documents, then the default
//! - Plain `ends_with` checks, no regex and no path parsing

/// Extensions served with a one-year immutable lifetime.
pub const STATIC_ASSET_EXTENSIONS: [&str; 12] = [
    "js", "css", "png", "jpg", "jpeg", "gif", "ico", "svg", "woff", "woff2", "ttf", "eot",
];

/// Extensions that must be revalidated on every request.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Cache bucket a request URI falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheClass {
    StaticAsset,
    Document,
    Default,
}

impl CacheClass {
    /// The `cache-control` value for this bucket.
    pub fn cache_control(self) -> &'static str {
        match self {
            CacheClass::StaticAsset => "public, max-age=31536000, immutable",
            CacheClass::Document => "public, max-age=0, must-revalidate",
            CacheClass::Default => "public, max-age=3600",
        }
    }
}

/// Classify a request URI by its literal trailing extension.
pub fn classify(uri: &str) -> CacheClass {
    if has_extension(uri, &STATIC_ASSET_EXTENSIONS) {
        CacheClass::StaticAsset
    } else if has_extension(uri, &DOCUMENT_EXTENSIONS) {
        CacheClass::Document
    } else {
        CacheClass::Default
    }
}

/// True if `uri` ends with `.` followed by one of `extensions`.
fn has_extension(uri: &str, extensions: &[&str]) -> bool {
    extensions.iter().any(|ext| {
        uri.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.'))
    })
}
