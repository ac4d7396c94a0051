//! Provider adapters for the News Anchor aggregator
//!
//! This crate provides clients for fetching news from:
//! - NewsAPI: top headlines and "everything" keyword search
//! - GNews: top headlines and keyword search
//!
//! Both implement [`NewsProvider`] and normalize their responses into
//! [`anchor_core::RawArticle`].

pub mod config;
pub mod error;
pub mod gnews;
pub mod newsapi;
pub mod normalize;
pub mod provider;
pub mod types;

#[cfg(test)]
mod testing;

pub use config::ProviderConfig;
pub use error::NewsError;
pub use gnews::GNewsClient;
pub use newsapi::NewsApiClient;
pub use normalize::ArticleCandidate;
pub use provider::{NewsProvider, QueryResult};
