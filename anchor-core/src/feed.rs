//! Result of one aggregation run

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Provider, RawArticle};

/// Merged, deduplicated and windowed articles from every provider
///
/// Built fresh for each request; nothing in it outlives the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedFeed {
    /// Articles, newest first
    pub articles: Vec<RawArticle>,
    /// Number of normalized articles received before deduplication
    pub total_before_dedup: usize,
    /// Number of articles dropped as duplicates
    pub duplicates_removed: usize,
    /// Normalized articles contributed by each queried provider
    pub per_provider_counts: BTreeMap<Provider, usize>,
    /// Number of queries that failed and contributed nothing
    pub failed_queries: usize,
    /// When the feed was assembled
    pub generated_at: DateTime<Utc>,
}

impl AggregatedFeed {
    /// A feed with no articles, as produced when every query fails
    pub fn empty(generated_at: DateTime<Utc>) -> Self {
        Self {
            articles: Vec::new(),
            total_before_dedup: 0,
            duplicates_removed: 0,
            per_provider_counts: BTreeMap::new(),
            failed_queries: 0,
            generated_at,
        }
    }

    /// Count attributed to `provider` (zero if it was not queried)
    pub fn provider_count(&self, provider: Provider) -> usize {
        self.per_provider_counts
            .get(&provider)
            .copied()
            .unwrap_or(0)
    }
}
