//! Viewer-response event model and handler.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::policy::{apply_policy, HeaderMapping};

/// Errors raised while decoding an invocation event.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("invalid event JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("event is missing required field `{0}`")]
    MissingField(&'static str),
}

/// Event passed to the function for each outgoing response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeEvent {
    pub request: EdgeRequest,
    pub response: EdgeResponse,

    /// Runtime metadata (`version`, `context`, `viewer`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The request that produced the response. Only `uri` is read.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeRequest {
    pub uri: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The outgoing response. Only `headers` is mutated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EdgeResponse {
    pub headers: HeaderMapping,

    /// `statusCode`, `statusDescription`, `cookies`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EdgeEvent {
    /// Decode an event, reporting missing required fields by path.
    pub fn from_json(input: &str) -> Result<Self, EventError> {
        let raw: Value = serde_json::from_str(input)?;

        require(&raw, &["request", "uri"], "request.uri")?;
        require(&raw, &["response", "headers"], "response.headers")?;

        Ok(serde_json::from_value(raw)?)
    }
}

fn require(raw: &Value, path: &[&str], field: &'static str) -> Result<(), EventError> {
    let mut node = raw;
    for key in path {
        node = node.get(*key).ok_or(EventError::MissingField(field))?;
    }
    Ok(())
}

/// Apply the header policy to the event's response and return it.
pub fn handle_event(event: EdgeEvent) -> EdgeResponse {
    let EdgeEvent {
        request,
        mut response,
        ..
    } = event;

    apply_policy(&request.uri, &mut response.headers);
    response
}

/// Decode `input`, handle it, and encode the resulting response.
pub fn handle_json(input: &str) -> Result<String, EventError> {
    let event = EdgeEvent::from_json(input)?;
    let response = handle_event(event);
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event(uri: &str) -> Value {
        json!({
            "version": "1.0",
            "context": { "eventType": "viewer-response" },
            "request": { "method": "GET", "uri": uri, "querystring": {} },
            "response": {
                "statusCode": 200,
                "statusDescription": "OK",
                "headers": {
                    "server": { "value": "nginx" },
                    "x-powered-by": { "value": "PHP" },
                    "content-type": { "value": "text/html" }
                },
                "cookies": {}
            }
        })
    }

    #[test]
    fn test_handle_json_mutates_headers() {
        let out = handle_json(&sample_event("/index.html").to_string()).unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();

        let headers = &out["headers"];
        assert!(headers.get("server").is_none());
        assert!(headers.get("x-powered-by").is_none());
        assert_eq!(headers["content-type"]["value"], "text/html");
        assert_eq!(headers["x-frame-options"]["value"], "SAMEORIGIN");
        assert_eq!(
            headers["cache-control"]["value"],
            "public, max-age=0, must-revalidate"
        );
    }

    #[test]
    fn test_response_fields_pass_through() {
        let out = handle_json(&sample_event("/app.js").to_string()).unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(out["statusCode"], 200);
        assert_eq!(out["statusDescription"], "OK");
        assert_eq!(out["cookies"], json!({}));
    }

    #[test]
    fn test_unrelated_header_objects_unchanged() {
        let accept_ranges = json!({
            "value": "bytes",
            "multiValue": [{ "value": "bytes" }, { "value": "none" }]
        });
        let mut event = sample_event("/api/data");
        event["response"]["headers"]["accept-ranges"] = accept_ranges.clone();

        let out = handle_json(&event.to_string()).unwrap();
        let out: Value = serde_json::from_str(&out).unwrap();

        assert_eq!(out["headers"]["accept-ranges"], accept_ranges);
        assert_eq!(out["headers"]["cache-control"]["value"], "public, max-age=3600");
    }

    #[test]
    fn test_missing_uri() {
        let mut event = sample_event("/");
        event["request"].as_object_mut().unwrap().remove("uri");

        let err = EdgeEvent::from_json(&event.to_string()).unwrap_err();
        assert!(matches!(err, EventError::MissingField("request.uri")));
    }

    #[test]
    fn test_missing_headers() {
        let event = json!({ "request": { "uri": "/" }, "response": { "statusCode": 200 } });

        let err = EdgeEvent::from_json(&event.to_string()).unwrap_err();
        assert!(matches!(err, EventError::MissingField("response.headers")));
        assert_eq!(
            err.to_string(),
            "event is missing required field `response.headers`"
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = handle_json("{not json").unwrap_err();
        assert!(matches!(err, EventError::Json(_)));
    }

    #[test]
    fn test_empty_headers_and_uri() {
        let event = json!({ "request": { "uri": "" }, "response": { "headers": {} } });
        let response = handle_event(EdgeEvent::from_json(&event.to_string()).unwrap());

        assert_eq!(response.headers.len(), 8);
        assert_eq!(response.headers.get("cache-control"), Some("public, max-age=3600"));
    }
}
