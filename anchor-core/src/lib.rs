//! Core types for the News Anchor aggregator
//!
//! This crate defines the value types shared across the workspace:
//! providers, normalized articles, upstream queries and the aggregated feed.

pub mod article;
pub mod error;
pub mod feed;
pub mod provider;
pub mod query;

pub use article::RawArticle;
pub use error::{AnchorError, AnchorResult};
pub use feed::AggregatedFeed;
pub use provider::Provider;
pub use query::{Query, QueryError, QueryKind};
