//! Business logic services for News Anchor
//!
//! This crate provides the service layer that fans queries out to the
//! provider adapters and turns their merged results into the public feed.

pub mod aggregator;
pub mod news_service;
pub mod presenter;

pub use aggregator::{AggregationOptions, NewsAggregator};
pub use news_service::{NewsService, NewsServiceConfig};
pub use presenter::{present, NewsEnvelope, SourceTally};
