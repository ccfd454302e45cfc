//! Integration tests for `HeaderPolicyLayer` on an Axum app.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use edge_headers::HeaderPolicyLayer;
use tower::ServiceExt;

async fn origin() -> impl IntoResponse {
    (
        [
            (header::SERVER, "nginx"),
            (header::HeaderName::from_static("x-powered-by"), "Express"),
            (header::CACHE_CONTROL, "no-store"),
            (header::ETAG, "\"v1\""),
        ],
        "hello",
    )
}

fn app() -> Router {
    Router::new()
        .route("/{*path}", get(origin))
        .layer(HeaderPolicyLayer)
}

async fn fetch(uri: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_layer_applies_policy() {
    let res = fetch("/assets/app.js").await;

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers();
    assert!(!headers.contains_key(header::SERVER));
    assert!(!headers.contains_key("x-powered-by"));
    assert_eq!(headers[header::CACHE_CONTROL], "public, max-age=31536000, immutable");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "SAMEORIGIN");
    assert_eq!(headers[header::REFERRER_POLICY], "strict-origin-when-cross-origin");
    assert_eq!(headers[header::X_XSS_PROTECTION], "1; mode=block");
    assert_eq!(headers[header::ETAG], "\"v1\"");
}

#[tokio::test]
async fn test_layer_keeps_body() {
    let res = fetch("/index.html").await;
    assert_eq!(res.headers()[header::CACHE_CONTROL], "public, max-age=0, must-revalidate");

    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"hello");
}

#[tokio::test]
async fn test_layer_query_breaks_suffix() {
    let res = fetch("/style.css?v=123").await;
    assert_eq!(res.headers()[header::CACHE_CONTROL], "public, max-age=3600");
}

#[tokio::test]
async fn test_layer_covers_fallback_responses() {
    // Unrouted requests still get the policy.
    let res = Router::new()
        .route("/known", get(|| async { "ok" }))
        .layer(HeaderPolicyLayer)
        .oneshot(Request::builder().uri("/missing.png").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()[header::CACHE_CONTROL], "public, max-age=31536000, immutable");
    assert!(res.headers().contains_key(header::STRICT_TRANSPORT_SECURITY));
}
