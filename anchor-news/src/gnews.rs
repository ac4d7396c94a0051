//! GNews client (Provider B)

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, instrument};

use anchor_core::{Provider, Query, QueryKind, RawArticle};

use crate::config::ProviderConfig;
use crate::error::NewsError;
use crate::normalize::normalize_all;
use crate::provider::{NewsProvider, QueryResult};
use crate::types::{GNewsErrorBody, GNewsResponse};

const HEADLINES_PATH: &str = "api/v4/top-headlines";
const SEARCH_PATH: &str = "api/v4/search";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_SORT: &str = "publishedAt";
// Keep articles without image or description in the upstream result;
// normalization decides what is usable.
const NULLABLE_FIELDS: &str = "description,image";

/// GNews client
pub struct GNewsClient {
    client: Client,
    config: ProviderConfig,
}

impl GNewsClient {
    /// Create a new GNews client
    pub fn new(config: ProviderConfig) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("NewsAnchor/1.0")
            .build()
            .map_err(|e| NewsError::InvalidConfig(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Run a query and return its normalized articles
    #[instrument(skip_all, fields(query = %query.label()))]
    pub async fn fetch_articles(&self, query: &Query) -> Result<Vec<RawArticle>, NewsError> {
        query.validate_for(Provider::GNews)?;

        let (path, params) = request_params(query);
        let timeout_secs = self.config.timeout.as_secs();

        debug!("Requesting GNews {} with {} params", path, params.len());

        let response = self
            .client
            .get(self.config.endpoint(path))
            .query(&[("apikey", self.config.api_key.as_str())])
            .query(&params)
            .send()
            .await
            .map_err(|e| NewsError::from_reqwest(e, timeout_secs))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| NewsError::from_reqwest(e, timeout_secs))?;
        let articles = parse_response(&body)?;

        debug!("GNews returned {} usable articles", articles.len());
        Ok(articles)
    }
}

#[async_trait]
impl NewsProvider for GNewsClient {
    fn provider(&self) -> Provider {
        Provider::GNews
    }

    async fn fetch(&self, query: &Query) -> QueryResult {
        self.fetch_articles(query).await.into()
    }
}

/// Endpoint path and query-string parameters, with defaults applied
///
/// The API key is not included; it is attached by the client.
pub fn request_params(query: &Query) -> (&'static str, Vec<(&'static str, String)>) {
    let mut params = Vec::new();

    if let Some(keyword) = query.trimmed_keyword() {
        params.push(("q", keyword.to_string()));
    }
    params.push((
        "lang",
        query
            .language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
    ));
    if let Some(country) = &query.country {
        params.push(("country", country.clone()));
    }

    let path = match query.kind {
        QueryKind::Headlines => {
            if let Some(category) = &query.category {
                params.push(("category", category.clone()));
            }
            HEADLINES_PATH
        }
        QueryKind::Search => SEARCH_PATH,
    };

    if let Some(from) = query.from {
        params.push(("from", start_of_day(from)));
    }
    if let Some(to) = query.to {
        params.push(("to", end_of_day(to)));
    }
    params.push((
        "max",
        query
            .page_size
            .unwrap_or_else(|| Provider::GNews.default_page_size())
            .to_string(),
    ));
    params.push((
        "sortby",
        query
            .sort_by
            .clone()
            .unwrap_or_else(|| DEFAULT_SORT.to_string()),
    ));
    params.push(("nullable", NULLABLE_FIELDS.to_string()));

    (path, params)
}

/// Decode a successful GNews body into normalized articles
pub fn parse_response(body: &[u8]) -> Result<Vec<RawArticle>, NewsError> {
    let response: GNewsResponse =
        serde_json::from_slice(body).map_err(|e| NewsError::ParseError(e.to_string()))?;

    Ok(normalize_all(
        response.articles.into_iter().map(Into::into),
        Provider::GNews,
    ))
}

fn start_of_day(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}

fn end_of_day(date: NaiveDate) -> String {
    format!("{}T23:59:59Z", date.format("%Y-%m-%d"))
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<GNewsErrorBody>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ => body.chars().take(200).collect(),
    }
}
