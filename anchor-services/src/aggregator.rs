//! News Aggregator
//!
//! Fans a set of queries out to the registered provider adapters, waits for
//! every one of them to settle, and merges what came back into a single
//! deduplicated, newest-first, windowed feed.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use futures::future::join_all;
use tracing::{debug, error, info, instrument, warn};

use anchor_core::{AggregatedFeed, AnchorError, AnchorResult, Provider, Query, RawArticle};
use anchor_news::{NewsError, NewsProvider, QueryResult};

/// Limits applied to one aggregation run
#[derive(Debug, Clone)]
pub struct AggregationOptions {
    /// Articles older than `now - window` are dropped
    pub window: Duration,
    /// Maximum number of articles returned
    pub max_results: usize,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            window: Duration::days(7),
            max_results: 100,
        }
    }
}

/// Concurrent fan-out over provider adapters
#[derive(Clone, Default)]
pub struct NewsAggregator {
    providers: HashMap<Provider, Arc<dyn NewsProvider>>,
}

impl NewsAggregator {
    /// Create an aggregator with no adapters registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the adapter for its provider, replacing any previous one
    pub fn with_provider(mut self, adapter: Arc<dyn NewsProvider>) -> Self {
        self.register(adapter);
        self
    }

    pub fn register(&mut self, adapter: Arc<dyn NewsProvider>) {
        info!("Registering {} adapter", adapter.provider());
        self.providers.insert(adapter.provider(), adapter);
    }

    pub fn is_configured(&self, provider: Provider) -> bool {
        self.providers.contains_key(&provider)
    }

    /// Run every query and merge the results
    ///
    /// Provider failures never make this fail; a run where every query fails
    /// yields an empty feed. The only error is a dispatch task panicking.
    #[instrument(skip_all, fields(queries = queries.len()))]
    pub async fn aggregate(
        &self,
        queries: Vec<Query>,
        options: &AggregationOptions,
    ) -> AnchorResult<AggregatedFeed> {
        let results = self.dispatch(queries).await?;
        let feed = merge(results, options, Utc::now());

        info!(
            "Aggregated {} articles ({} received, {} duplicates, {} failed queries)",
            feed.articles.len(),
            feed.total_before_dedup,
            feed.duplicates_removed,
            feed.failed_queries
        );

        Ok(feed)
    }

    /// Spawn one task per query and wait for all of them
    ///
    /// Tasks are not cancelled if the caller goes away; each runs until its
    /// adapter returns or times out.
    async fn dispatch(&self, queries: Vec<Query>) -> AnchorResult<Vec<(Query, QueryResult)>> {
        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let adapter = self.providers.get(&query.provider).cloned();
                tokio::spawn(async move {
                    let result = match adapter {
                        Some(adapter) => adapter.fetch(&query).await,
                        None => QueryResult::Failed(NewsError::NotConfigured(query.provider)),
                    };
                    (query, result)
                })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| {
                joined.map_err(|e| AnchorError::internal(format!("query task failed: {}", e)))
            })
            .collect()
    }
}

/// Merge settled query results into a feed
///
/// Articles are concatenated in provider order, then in the order the
/// queries were listed; dedup, sort, window and cap follow in that order.
pub fn merge(
    results: Vec<(Query, QueryResult)>,
    options: &AggregationOptions,
    now: DateTime<Utc>,
) -> AggregatedFeed {
    let mut per_provider_counts: BTreeMap<Provider, usize> = BTreeMap::new();
    let mut failed_queries = 0;
    let mut batches: Vec<(Provider, Vec<RawArticle>)> = Vec::with_capacity(results.len());

    for (query, result) in results {
        let count = per_provider_counts.entry(query.provider).or_insert(0);
        match result {
            QueryResult::Fetched(articles) => {
                debug!("{} returned {} articles", query.label(), articles.len());
                *count += articles.len();
                batches.push((query.provider, articles));
            }
            QueryResult::Failed(e) => {
                failed_queries += 1;
                if matches!(e, NewsError::InvalidQuery(_)) {
                    error!("{} was rejected: {}", query.label(), e);
                } else {
                    warn!("{} failed: {}", query.label(), e);
                }
            }
        }
    }

    // Stable: queries of the same provider keep their listed order
    batches.sort_by_key(|(provider, _)| *provider);
    let all_articles: Vec<RawArticle> = batches
        .into_iter()
        .flat_map(|(_, articles)| articles)
        .collect();

    let total_before_dedup = all_articles.len();
    let mut articles = dedup(all_articles);
    let duplicates_removed = total_before_dedup - articles.len();

    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    // A window reaching past the calendar's start keeps everything
    if let Some(cutoff) = now.checked_sub_signed(options.window) {
        articles.retain(|a| a.published_at >= cutoff);
    }
    articles.truncate(options.max_results);

    AggregatedFeed {
        articles,
        total_before_dedup,
        duplicates_removed,
        per_provider_counts,
        failed_queries,
        generated_at: now,
    }
}

/// Drop every article matched by an earlier one
///
/// Two articles match when their URLs are byte-equal, or when they share a
/// source and their titles are equal after trimming and lower-casing. An
/// article is compared against all earlier articles, including ones that
/// were themselves dropped.
pub fn dedup(articles: Vec<RawArticle>) -> Vec<RawArticle> {
    let mut seen_urls: HashSet<String> = HashSet::new();
    let mut seen_titles: HashSet<(String, String)> = HashSet::new();

    articles
        .into_iter()
        .filter(|article| {
            let new_url = seen_urls.insert(article.url.clone());
            let new_title = seen_titles.insert((article.title_key(), article.source.clone()));
            new_url && new_title
        })
        .collect()
}
