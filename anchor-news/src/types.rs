//! API-specific types for NewsAPI and GNews
//!
//! Every field is optional: providers routinely return nulls, and the
//! required-field check happens once, in [`crate::normalize`]. Article
//! arrays are decoded item by item so one malformed entry cannot sink the
//! rest of the page.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::normalize::ArticleCandidate;

/// Decode a nullable array, skipping items that do not fit `T`
fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

// ============================================================================
// NewsAPI Types
// ============================================================================

/// NewsAPI `/v2/top-headlines` and `/v2/everything` response
#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    /// "ok" or "error"
    pub status: Option<String>,
    /// Total matches upstream (not the page size)
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
    /// Articles on this page
    #[serde(default, deserialize_with = "lenient_items")]
    pub articles: Vec<NewsApiArticle>,
}

/// NewsAPI error body
#[derive(Debug, Deserialize)]
pub struct NewsApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// A single NewsAPI article
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiArticle {
    pub source: Option<NewsApiSource>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Image URL
    #[serde(rename = "urlToImage")]
    pub url_to_image: Option<String>,
    /// Publication date (ISO 8601)
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub content: Option<String>,
}

/// NewsAPI source reference
#[derive(Debug, Clone, Deserialize)]
pub struct NewsApiSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl From<NewsApiArticle> for ArticleCandidate {
    fn from(article: NewsApiArticle) -> Self {
        Self {
            source_name: article.source.and_then(|s| s.name),
            title: article.title,
            description: article.description,
            url: article.url,
            published_at: article.published_at,
            image: article.url_to_image,
        }
    }
}

// ============================================================================
// GNews Types
// ============================================================================

/// GNews `/top-headlines` and `/search` response
#[derive(Debug, Deserialize)]
pub struct GNewsResponse {
    /// Total matches upstream
    #[serde(rename = "totalArticles")]
    pub total_articles: Option<u64>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub articles: Vec<GNewsArticle>,
}

/// GNews error body
#[derive(Debug, Deserialize)]
pub struct GNewsErrorBody {
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A single GNews article
#[derive(Debug, Clone, Deserialize)]
pub struct GNewsArticle {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    /// Image URL
    pub image: Option<String>,
    /// Publication date (ISO 8601)
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub source: Option<GNewsSource>,
}

/// GNews source reference
#[derive(Debug, Clone, Deserialize)]
pub struct GNewsSource {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl From<GNewsArticle> for ArticleCandidate {
    fn from(article: GNewsArticle) -> Self {
        Self {
            source_name: article.source.and_then(|s| s.name),
            title: article.title,
            description: article.description,
            url: article.url,
            published_at: article.published_at,
            image: article.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_items_are_skipped() {
        let response: NewsApiResponse = serde_json::from_str(
            r#"{"status":"ok","articles":[null,{"title":42},"junk",{"title":"Kept"}]}"#,
        )
        .unwrap();
        assert_eq!(response.articles.len(), 1);
        assert_eq!(response.articles[0].title.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_null_or_missing_articles() {
        let response: GNewsResponse =
            serde_json::from_str(r#"{"totalArticles":0,"articles":null}"#).unwrap();
        assert!(response.articles.is_empty());

        let response: NewsApiResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.articles.is_empty());
    }
}
