//! Tower middleware applying the header policy to outgoing responses.
//!
//! # Design Decisions
//! - The policy is keyed on the request target as received (path and query),
//!   so `/style.css?v=1` lands in the default cache bucket, same as at the edge
//! - Headers are mutated after the inner service responds; bodies are untouched

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::http::{Request, Response, Uri};
use tower::{Layer, Service};

use crate::policy::apply_policy;

/// Layer wrapping a service with [`HeaderPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderPolicyLayer;

impl<S> Layer<S> for HeaderPolicyLayer {
    type Service = HeaderPolicy<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HeaderPolicy { inner }
    }
}

/// Service applying the response header policy.
#[derive(Debug, Clone)]
pub struct HeaderPolicy<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HeaderPolicy<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let target = request_target(req.uri());
        let future = self.inner.call(req);

        Box::pin(async move {
            let mut response = future.await?;
            apply_policy(&target, response.headers_mut());
            Ok(response)
        })
    }
}

/// The origin-form target of `uri`: path plus query, without scheme or authority.
fn request_target(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
