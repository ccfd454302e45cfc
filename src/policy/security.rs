//! Fixed security headers attached to every response.

pub const STRICT_TRANSPORT_SECURITY: &str = "max-age=31536000; includeSubDomains; preload";

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
script-src 'self' 'unsafe-inline' 'unsafe-eval'; \
style-src 'self' 'unsafe-inline'; \
img-src 'self' data: https:; \
font-src 'self' data:; \
connect-src 'self'; \
frame-ancestors 'self'; \
base-uri 'self'; \
form-action 'self'";

pub const PERMISSIONS_POLICY: &str = "geolocation=(), microphone=(), camera=(), payment=(), \
usb=(), magnetometer=(), gyroscope=(), accelerometer=()";

/// Headers set unconditionally, in application order. Existing values are overwritten.
pub const SECURITY_HEADERS: [(&str, &str); 7] = [
    ("strict-transport-security", STRICT_TRANSPORT_SECURITY),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("content-security-policy", CONTENT_SECURITY_POLICY),
    ("permissions-policy", PERMISSIONS_POLICY),
];

/// Headers that leak server implementation details.
pub const SUPPRESSED_HEADERS: [&str; 2] = ["server", "x-powered-by"];
