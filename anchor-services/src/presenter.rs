//! Response envelope for the latest-news endpoint

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde::Serialize;

use anchor_core::{AggregatedFeed, Provider, RawArticle};

/// Body of `GET /api/news/latest-news`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsEnvelope {
    /// Number of articles in `articles`
    pub count: usize,
    /// Articles, newest first
    pub articles: Vec<RawArticle>,
    /// Per-provider tallies plus the duplicate count
    pub sources: SourceTally,
    /// Feed generation time (ISO 8601, millisecond precision)
    pub last_updated: String,
}

/// `{ "newsApi": n, "gnews": m, "duplicatesRemoved": d }`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTally {
    #[serde(flatten)]
    pub providers: BTreeMap<String, usize>,
    pub duplicates_removed: usize,
}

/// Shape a feed for transport
///
/// Every known provider gets a tally entry, zero when it contributed nothing.
pub fn present(feed: AggregatedFeed) -> NewsEnvelope {
    let providers = Provider::ALL
        .iter()
        .map(|p| (p.tally_key().to_string(), feed.provider_count(*p)))
        .collect();

    NewsEnvelope {
        count: feed.articles.len(),
        sources: SourceTally {
            providers,
            duplicates_removed: feed.duplicates_removed,
        },
        last_updated: feed
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        articles: feed.articles,
    }
}
