//! News Anchor API Server
//!
//! HTTP API server that aggregates the latest headlines from NewsAPI and GNews.

mod config;
mod error;
mod routes;

use anchor_news::{GNewsClient, NewsApiClient};
use anchor_services::{NewsAggregator, NewsService};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ApiConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env.local wins over .env since dotenvy never overrides a set variable
    for file in [".env.local", ".env"] {
        if let Err(e) = dotenvy::from_filename(file) {
            if !matches!(e, dotenvy::Error::Io(_)) {
                eprintln!("Warning: Failed to load {}: {}", file, e);
            }
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,anchor_api=debug")),
        )
        .init();

    info!("Starting News Anchor API");

    let config = ApiConfig::from_env()?;
    let news_service = Arc::new(NewsService::new(
        build_aggregator(&config)?,
        config.news.clone(),
    ));

    let state = AppState { news_service };

    // Configure CORS for the frontend (credentials rule out wildcards)
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.parse::<HeaderValue>()?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = routes::app(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Register an adapter for every provider that has an API key
fn build_aggregator(config: &ApiConfig) -> anyhow::Result<NewsAggregator> {
    let mut aggregator = NewsAggregator::new();

    match &config.news_api {
        Some(provider_config) => {
            aggregator.register(Arc::new(NewsApiClient::new(provider_config.clone())?));
            info!("NewsAPI adapter enabled ({})", provider_config.base_url);
        }
        None => warn!("NEWS_API_KEY not set - NewsAPI queries will be skipped"),
    }

    match &config.gnews {
        Some(provider_config) => {
            aggregator.register(Arc::new(GNewsClient::new(provider_config.clone())?));
            info!("GNews adapter enabled ({})", provider_config.base_url);
        }
        None => warn!("GNEWS_API_KEY not set - GNews queries will be skipped"),
    }

    Ok(aggregator)
}
