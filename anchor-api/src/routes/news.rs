//! News-related API endpoints

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;

use anchor_services::NewsEnvelope;

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for the latest-news feed
#[derive(Debug, Deserialize)]
pub struct LatestNewsQuery {
    /// Lower the article cap for this request
    pub limit: Option<usize>,
}

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/news/latest-news", get(get_latest_news))
}

/// GET /api/news/latest-news - Merged, deduplicated feed from every provider
///
/// Provider failures only shrink the feed; the response is 500 only when the
/// aggregation itself breaks.
async fn get_latest_news(
    State(state): State<AppState>,
    Query(params): Query<LatestNewsQuery>,
) -> Result<Json<NewsEnvelope>, ApiError> {
    let envelope = state.news_service.latest_news(params.limit).await?;
    info!(
        "Serving {} articles ({} duplicates removed)",
        envelope.count, envelope.sources.duplicates_removed
    );
    Ok(Json(envelope))
}
