//! Upstream query description
//!
//! A [`Query`] is an immutable value built once per aggregation run. It
//! names its provider and carries the optional filters that provider
//! understands; adapters translate it into their own request parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Provider;

/// Kind of upstream request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// Current top headlines
    Headlines,
    /// Keyword search
    Search,
}

/// Reasons a query is rejected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("search query requires a non-empty keyword")]
    MissingKeyword,

    #[error("date range is inverted: from {from} is after to {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },

    #[error("page size must be greater than zero")]
    ZeroPageSize,

    #[error("query for {expected} sent to {actual} adapter")]
    WrongProvider { expected: Provider, actual: Provider },
}

/// One parameterized request to a single provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Provider this query is addressed to
    pub provider: Provider,
    /// Headlines or search
    pub kind: QueryKind,
    /// Search keyword (required for search, optional narrowing for headlines)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Language code (provider default: "en")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Category (e.g., "technology", "business")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Earliest publication date (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    /// Latest publication date (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    /// Maximum number of articles requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Result page (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Sort hint (provider default: "publishedAt")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
}

impl Query {
    fn new(provider: Provider, kind: QueryKind) -> Self {
        Self {
            provider,
            kind,
            keyword: None,
            language: None,
            country: None,
            category: None,
            from: None,
            to: None,
            page_size: None,
            page: None,
            sort_by: None,
        }
    }

    /// Top headlines from `provider`
    pub fn headlines(provider: Provider) -> Self {
        Self::new(provider, QueryKind::Headlines)
    }

    /// Keyword search against `provider`
    pub fn search(provider: Provider, keyword: impl Into<String>) -> Self {
        Self::new(provider, QueryKind::Search).keyword(keyword)
    }

    /// Set the search keyword
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Restrict results to a language code (e.g. "en")
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Restrict results to a country code (e.g. "us")
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict headlines to a provider category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Limit a search to `from..=to`, both inclusive
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Number of articles to request
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// 1-based result page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Provider sort order (e.g. "publishedAt")
    pub fn sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Keyword with surrounding whitespace removed, if non-empty
    pub fn trimmed_keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Check the query can be sent as-is
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.kind == QueryKind::Search && self.trimmed_keyword().is_none() {
            return Err(QueryError::MissingKeyword);
        }

        if let (Some(from), Some(to)) = (self.from, self.to) {
            if from > to {
                return Err(QueryError::InvertedDateRange { from, to });
            }
        }

        if self.page_size == Some(0) {
            return Err(QueryError::ZeroPageSize);
        }

        Ok(())
    }

    /// Validate and check the query targets `provider`
    pub fn validate_for(&self, provider: Provider) -> Result<(), QueryError> {
        if self.provider != provider {
            return Err(QueryError::WrongProvider {
                expected: self.provider,
                actual: provider,
            });
        }
        self.validate()
    }

    /// Short label for logs, e.g. "NewsAPI search 'latest news'"
    pub fn label(&self) -> String {
        match (self.kind, self.trimmed_keyword()) {
            (QueryKind::Headlines, None) => format!("{} headlines", self.provider),
            (QueryKind::Headlines, Some(k)) => format!("{} headlines '{}'", self.provider, k),
            (QueryKind::Search, k) => {
                format!("{} search '{}'", self.provider, k.unwrap_or_default())
            }
        }
    }
}
