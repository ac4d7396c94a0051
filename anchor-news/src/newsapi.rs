//! NewsAPI client (Provider A)
//!
//! Headlines map to `/v2/top-headlines`, searches to `/v2/everything`.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use anchor_core::{Provider, Query, QueryKind, RawArticle};

use crate::config::ProviderConfig;
use crate::error::NewsError;
use crate::normalize::normalize_all;
use crate::provider::{NewsProvider, QueryResult};
use crate::types::{NewsApiErrorBody, NewsApiResponse};

const HEADLINES_PATH: &str = "v2/top-headlines";
const EVERYTHING_PATH: &str = "v2/everything";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_COUNTRY: &str = "us";
const DEFAULT_SORT: &str = "publishedAt";

/// NewsAPI client
pub struct NewsApiClient {
    client: Client,
    config: ProviderConfig,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
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
        query.validate_for(Provider::NewsApi)?;

        let (path, params) = request_params(query);
        let timeout_secs = self.config.timeout.as_secs();

        debug!("Requesting NewsAPI {} with {} params", path, params.len());

        let response = self
            .client
            .get(self.config.endpoint(path))
            .header("X-Api-Key", &self.config.api_key)
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

        debug!("NewsAPI returned {} usable articles", articles.len());
        Ok(articles)
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    fn provider(&self) -> Provider {
        Provider::NewsApi
    }

    async fn fetch(&self, query: &Query) -> QueryResult {
        self.fetch_articles(query).await.into()
    }
}

/// Endpoint path and query-string parameters, with defaults applied
pub fn request_params(query: &Query) -> (&'static str, Vec<(&'static str, String)>) {
    let mut params = Vec::new();

    if let Some(keyword) = query.trimmed_keyword() {
        params.push(("q", keyword.to_string()));
    }
    params.push((
        "language",
        query
            .language
            .clone()
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
    ));

    let path = match query.kind {
        QueryKind::Headlines => {
            params.push((
                "country",
                query
                    .country
                    .clone()
                    .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            ));
            if let Some(category) = &query.category {
                params.push(("category", category.clone()));
            }
            HEADLINES_PATH
        }
        QueryKind::Search => {
            if let Some(from) = query.from {
                params.push(("from", from.format("%Y-%m-%d").to_string()));
            }
            if let Some(to) = query.to {
                params.push(("to", to.format("%Y-%m-%d").to_string()));
            }
            params.push((
                "sortBy",
                query
                    .sort_by
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SORT.to_string()),
            ));
            EVERYTHING_PATH
        }
    };

    params.push((
        "pageSize",
        query
            .page_size
            .unwrap_or_else(|| Provider::NewsApi.default_page_size())
            .to_string(),
    ));
    params.push(("page", query.page.unwrap_or(1).to_string()));

    (path, params)
}

/// Decode a successful NewsAPI body into normalized articles
pub fn parse_response(body: &[u8]) -> Result<Vec<RawArticle>, NewsError> {
    let response: NewsApiResponse =
        serde_json::from_slice(body).map_err(|e| NewsError::ParseError(e.to_string()))?;

    if response.status.as_deref() == Some("error") {
        return Err(NewsError::ApiError {
            status: 200,
            message: error_message(&String::from_utf8_lossy(body)),
        });
    }

    Ok(normalize_all(
        response.articles.into_iter().map(Into::into),
        Provider::NewsApi,
    ))
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<NewsApiErrorBody>(body) {
        Ok(NewsApiErrorBody {
            code: Some(code),
            message: Some(message),
        }) => format!("{}: {}", code, message),
        Ok(NewsApiErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.chars().take(200).collect(),
    }
}
