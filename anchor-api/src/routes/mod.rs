//! API route definitions

mod health;
mod news;

use axum::Router;
use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(news::routes())
}

/// Full application router: `/api/...` plus the root and health endpoints
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .merge(health::routes())
        .with_state(state)
}
