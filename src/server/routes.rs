// src/server/routes.rs

//! Handlers for the IndexNow HTTP surface.

use axum::{
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info, instrument, warn};

use crate::models::EndpointResult;

use super::AppState;

/// Body of a successful `POST /api/indexnow`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub results: Vec<EndpointResult>,
    pub urls_submitted: usize,
}

/// `POST /api/indexnow` with `{ "urls": [...] }`.
#[instrument(skip(state, body))]
pub async fn submit(State(state): State<AppState>, body: Bytes) -> Response {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            error!("Unreadable submission body: {}", e);
            return internal_error(&e);
        }
    };

    let Some(urls) = parse_urls(&request) else {
        warn!("Rejected submission without a urls array");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid request. Expected { \"urls\": string[] }" })),
        )
            .into_response();
    };

    match state.notifier.submit(&urls).await {
        Ok(outcome) => {
            info!(
                "Submitted {} URLs, {}/{} endpoints accepted",
                outcome.urls_submitted,
                outcome.accepted_count(),
                outcome.results.len()
            );
            let response = SubmitResponse {
                message: format!("Submitted {} URLs to IndexNow", outcome.urls_submitted),
                results: outcome.results,
                urls_submitted: outcome.urls_submitted,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            internal_error(&e)
        }
    }
}

/// `GET /api/indexnow`: static description, no side effects.
pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let site = state.notifier.site();
    Json(json!({
        "message": "IndexNow API endpoint",
        "usage": "POST { \"urls\": [\"/path\", \"https://host/path\"] }",
        "host": site.host,
        "keyLocation": site.key_location(),
        "endpoints": state.notifier.endpoints(),
    }))
}

/// `GET /{key}.txt`: ownership proof checked by the search engines.
pub async fn key_file(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.notifier.site().key.clone(),
    )
}

/// `urls` must be present, an array, and contain only strings.
fn parse_urls(request: &Value) -> Option<Vec<String>> {
    request
        .get("urls")?
        .as_array()?
        .iter()
        .map(|url| url.as_str().map(str::to_owned))
        .collect()
}

fn internal_error(e: &dyn std::fmt::Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to submit URLs", "details": e.to_string() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urls() {
        assert_eq!(
            parse_urls(&json!({ "urls": ["/a", "https://x.test/b"] })),
            Some(vec!["/a".to_string(), "https://x.test/b".to_string()])
        );
        assert_eq!(parse_urls(&json!({ "urls": [] })), Some(vec![]));
        assert_eq!(parse_urls(&json!({})), None);
        assert_eq!(parse_urls(&json!({ "urls": "/a" })), None);
        assert_eq!(parse_urls(&json!({ "urls": ["/a", 3] })), None);
        assert_eq!(parse_urls(&json!(["/a"])), None);
    }
}
