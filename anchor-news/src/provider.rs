//! Provider adapter contract

use async_trait::async_trait;

use anchor_core::{Provider, Query, RawArticle};

use crate::error::NewsError;

/// Outcome of one upstream query
///
/// A failed query is a value, not an error: it contributes no articles
/// and the aggregation carries on with the others.
#[derive(Debug)]
pub enum QueryResult {
    /// Normalized articles, in provider order
    Fetched(Vec<RawArticle>),
    /// The query produced nothing usable
    Failed(NewsError),
}

impl QueryResult {
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryResult::Failed(_))
    }

    /// Articles carried by the result (empty when failed)
    pub fn into_articles(self) -> Vec<RawArticle> {
        match self {
            QueryResult::Fetched(articles) => articles,
            QueryResult::Failed(_) => Vec::new(),
        }
    }
}

impl From<Result<Vec<RawArticle>, NewsError>> for QueryResult {
    fn from(result: Result<Vec<RawArticle>, NewsError>) -> Self {
        match result {
            Ok(articles) => QueryResult::Fetched(articles),
            Err(e) => QueryResult::Failed(e),
        }
    }
}

/// An adapter translating queries into requests against one provider
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Provider served by this adapter
    fn provider(&self) -> Provider;

    /// Run one query. Never panics on upstream trouble and never retries.
    async fn fetch(&self, query: &Query) -> QueryResult;
}
