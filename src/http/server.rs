//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the invocation and health handlers
//! - Wire up middleware (tracing, body limit, timeout)
//! - Bind server to listener and shut down gracefully
//!
//! Stands in for the edge runtime: each `POST /invoke` carries one
//! viewer-response event and gets back the response object with its
//! headers rewritten.

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::EdgeConfig;
use crate::edge::handle_json;
use crate::lifecycle::shutdown_signal;

/// HTTP server hosting the header policy function.
pub struct HttpServer {
    router: Router,
    config: EdgeConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EdgeConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EdgeConfig) -> Router {
        Router::new()
            .route("/invoke", post(invoke_handler))
            .route("/health", get(health_handler))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.limits.max_event_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until `shutdown` fires or Ctrl+C is received.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_event_bytes = self.config.limits.max_event_bytes,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Run the policy over one invocation event.
async fn invoke_handler(body: String) -> Response {
    match handle_json(&body) {
        Ok(json) => ([(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected invocation event");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}
