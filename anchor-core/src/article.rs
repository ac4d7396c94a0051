//! Normalized article shared by every provider

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Provider;

/// Source name used when a provider omits it
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// A provider article mapped into the common schema
///
/// Adapters only construct this after the required fields (title,
/// description, url, publication date) have been checked, so downstream
/// stages never see an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    /// Name of the publishing outlet (e.g., "Reuters")
    pub source: String,
    /// Article title
    pub title: String,
    /// Short description/excerpt
    pub description: String,
    /// Canonical article URL
    pub url: String,
    /// Publication date
    pub published_at: DateTime<Utc>,
    /// Thumbnail/image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Provider that returned the article
    pub provider: Provider,
}

impl RawArticle {
    /// Title key used for duplicate detection: trimmed and lower-cased
    pub fn title_key(&self) -> String {
        self.title.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_public_shape() {
        let article = RawArticle {
            source: "BBC News".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
            url: "https://bbc.co.uk/a".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            image: None,
            provider: Provider::NewsApi,
        };

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["publishedAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["provider"], "NewsAPI");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_title_key() {
        let article = RawArticle {
            source: "AP".to_string(),
            title: "  Markets RALLY \n".to_string(),
            description: "d".to_string(),
            url: "https://x/a".to_string(),
            published_at: Utc::now(),
            image: None,
            provider: Provider::GNews,
        };
        assert_eq!(article.title_key(), "markets rally");
    }
}
