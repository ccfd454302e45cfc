//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use edge_headers::config::EdgeConfig;
use edge_headers::{HttpServer, Shutdown};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Start the invocation server on an ephemeral port.
///
/// Keep the returned `Shutdown` alive for as long as the server should run.
pub async fn start_server(mut config: EdgeConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".into();
    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    (addr, shutdown)
}

/// A viewer-response event for `uri` with leaky origin headers.
pub fn viewer_response_event(uri: &str) -> Value {
    json!({
        "version": "1.0",
        "context": { "eventType": "viewer-response", "distributionId": "E1ABCDEF" },
        "viewer": { "ip": "198.51.100.7" },
        "request": { "method": "GET", "uri": uri, "querystring": {}, "headers": {} },
        "response": {
            "statusCode": 200,
            "statusDescription": "OK",
            "headers": {
                "server": { "value": "nginx/1.25.3" },
                "x-powered-by": { "value": "PHP/8.2" },
                "content-type": { "value": "text/html; charset=utf-8" },
                "x-frame-options": { "value": "DENY" }
            },
            "cookies": {}
        }
    })
}
