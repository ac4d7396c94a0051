//! News Service
//!
//! Builds the standing set of upstream queries for the latest-news feed,
//! runs them through the [`NewsAggregator`] and presents the result.

use chrono::{Duration, NaiveDate, Utc};
use tracing::{debug, instrument};

use anchor_core::{AnchorResult, Provider, Query};

use crate::aggregator::{AggregationOptions, NewsAggregator};
use crate::presenter::{present, NewsEnvelope};

/// Excludes stories NewsAPI has taken down
const NEWSAPI_SEARCH_KEYWORD: &str = r#"NOT "removed" NOT "deleted""#;
const GNEWS_SEARCH_KEYWORD: &str = "latest news";

/// Configuration for NewsService
#[derive(Debug, Clone)]
pub struct NewsServiceConfig {
    /// Recency cutoff for returned articles
    pub window: Duration,
    /// Maximum articles per response
    pub max_results: usize,
    /// Language requested from every provider
    pub language: String,
    /// Page size for the NewsAPI keyword search
    pub newsapi_search_page_size: u32,
    /// Page size for headline queries and the GNews search
    pub page_size: u32,
}

impl Default for NewsServiceConfig {
    fn default() -> Self {
        Self {
            window: Duration::days(7),
            max_results: 100,
            language: "en".to_string(),
            newsapi_search_page_size: 50,
            page_size: 30,
        }
    }
}

/// Latest-news feed over every configured provider
pub struct NewsService {
    aggregator: NewsAggregator,
    config: NewsServiceConfig,
}

impl NewsService {
    /// Create a new NewsService
    pub fn new(aggregator: NewsAggregator, config: NewsServiceConfig) -> Self {
        Self { aggregator, config }
    }

    pub fn config(&self) -> &NewsServiceConfig {
        &self.config
    }

    /// Providers with a registered adapter
    pub fn configured_providers(&self) -> Vec<Provider> {
        Provider::ALL
            .iter()
            .copied()
            .filter(|p| self.aggregator.is_configured(*p))
            .collect()
    }

    /// Queries for one run: searches cover yesterday and `today`
    pub fn default_queries(&self, today: NaiveDate) -> Vec<Query> {
        let yesterday = today - Duration::days(1);
        let language = self.config.language.as_str();

        vec![
            Query::search(Provider::NewsApi, NEWSAPI_SEARCH_KEYWORD)
                .date_range(yesterday, today)
                .sort_by("publishedAt")
                .language(language)
                .page_size(self.config.newsapi_search_page_size)
                .page(1),
            Query::headlines(Provider::NewsApi)
                .language(language)
                .page_size(self.config.page_size)
                .page(1),
            Query::headlines(Provider::GNews)
                .language(language)
                .page_size(self.config.page_size),
            Query::search(Provider::GNews, GNEWS_SEARCH_KEYWORD)
                .date_range(yesterday, today)
                .language(language)
                .page_size(self.config.page_size),
        ]
    }

    /// Aggregate and present the latest news
    ///
    /// `limit` can lower the configured cap but never raise it.
    #[instrument(skip(self))]
    pub async fn latest_news(&self, limit: Option<usize>) -> AnchorResult<NewsEnvelope> {
        let options = AggregationOptions {
            window: self.config.window,
            max_results: limit
                .map(|l| l.min(self.config.max_results))
                .unwrap_or(self.config.max_results),
        };
        let queries = self.default_queries(Utc::now().date_naive());
        debug!("Dispatching {} queries", queries.len());

        let feed = self.aggregator.aggregate(queries, &options).await?;
        Ok(present(feed))
    }
}
