//! Health check endpoints

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
    /// Tally keys of the providers with an API key
    providers: Vec<&'static str>,
}

/// Health check handler
///
/// The server answers OK even with no providers configured; the feed is then
/// simply empty.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        providers: state
            .news_service
            .configured_providers()
            .into_iter()
            .map(|p| p.tally_key())
            .collect(),
    })
}

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "News Anchor API Server is running!" }))
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use anchor_services::{NewsAggregator, NewsService, NewsServiceConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::routes::app;
    use crate::AppState;

    fn state() -> AppState {
        AppState {
            news_service: Arc::new(NewsService::new(
                NewsAggregator::new(),
                NewsServiceConfig::default(),
            )),
        }
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app(state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "OK");
        assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(json["providers"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_liveness_and_root() {
        let (status, body) = get("/health/live").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"OK");

        let (status, body) = get("/").await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "News Anchor API Server is running!");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _) = get("/api/news/oldest-news").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
