//! Mapping provider articles into [`RawArticle`]
//!
//! Every adapter funnels its raw items through [`ArticleCandidate::normalize`].
//! An item is kept only when all of these hold:
//!
//! - `title`, `description` and `url` are present and not blank
//! - `published_at` is present and parses as RFC 3339
//! - neither title nor description contains the provider's removal
//!   sentinel (see [`Provider::removal_sentinel`]), compared case-insensitively
//!
//! Items failing the check are dropped silently; they are not fetch failures.

use chrono::{DateTime, Utc};

use anchor_core::article::UNKNOWN_SOURCE;
use anchor_core::{Provider, RawArticle};

/// Provider article fields before validation
#[derive(Debug, Clone, Default)]
pub struct ArticleCandidate {
    pub source_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<String>,
    pub image: Option<String>,
}

impl ArticleCandidate {
    /// Validate and convert, or `None` if a required field is missing
    pub fn normalize(self, provider: Provider) -> Option<RawArticle> {
        let title = required(self.title)?;
        let description = required(self.description)?;
        let url = required(self.url)?;
        let published_at = parse_published_at(self.published_at.as_deref()?)?;

        if let Some(sentinel) = provider.removal_sentinel() {
            let removed = contains_ignore_case(&title, sentinel)
                || contains_ignore_case(&description, sentinel);
            if removed {
                return None;
            }
        }

        let source = self
            .source_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_SOURCE.to_string());

        Some(RawArticle {
            source,
            title,
            description,
            url,
            published_at,
            image: self.image.filter(|i| !i.trim().is_empty()),
            provider,
        })
    }
}

/// Normalize a batch, preserving provider order
pub fn normalize_all(
    candidates: impl IntoIterator<Item = ArticleCandidate>,
    provider: Provider,
) -> Vec<RawArticle> {
    candidates
        .into_iter()
        .filter_map(|c| c.normalize(provider))
        .collect()
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

fn parse_published_at(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> ArticleCandidate {
        ArticleCandidate {
            source_name: Some("Reuters".to_string()),
            title: Some("Rates held steady".to_string()),
            description: Some("The central bank kept rates unchanged.".to_string()),
            url: Some("https://reuters.com/a".to_string()),
            published_at: Some("2024-05-01T12:30:00+02:00".to_string()),
            image: Some("https://reuters.com/a.jpg".to_string()),
        }
    }

    #[test]
    fn test_valid_candidate() {
        let article = candidate().normalize(Provider::GNews).unwrap();
        assert_eq!(article.source, "Reuters");
        assert_eq!(article.published_at.to_rfc3339(), "2024-05-01T10:30:00+00:00");
        assert_eq!(article.provider, Provider::GNews);
    }

    #[test]
    fn test_missing_required_fields() {
        let mut c = candidate();
        c.title = None;
        assert!(c.normalize(Provider::NewsApi).is_none());

        let mut c = candidate();
        c.description = Some("   ".to_string());
        assert!(c.normalize(Provider::NewsApi).is_none());

        let mut c = candidate();
        c.url = Some(String::new());
        assert!(c.normalize(Provider::NewsApi).is_none());

        let mut c = candidate();
        c.published_at = Some("yesterday".to_string());
        assert!(c.normalize(Provider::NewsApi).is_none());
    }

    #[test]
    fn test_removal_sentinel_is_per_provider() {
        let mut c = candidate();
        c.title = Some("[Removed]".to_string());
        assert!(c.clone().normalize(Provider::NewsApi).is_none());
        assert!(c.normalize(Provider::GNews).is_some());

        let mut c = candidate();
        c.description = Some("This story was REMOVED by the publisher".to_string());
        assert!(c.normalize(Provider::NewsApi).is_none());
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let mut c = candidate();
        c.source_name = None;
        c.image = Some(String::new());
        let article = c.normalize(Provider::NewsApi).unwrap();
        assert_eq!(article.source, UNKNOWN_SOURCE);
        assert_eq!(article.image, None);
    }

    #[test]
    fn test_normalize_all_is_idempotent() {
        let batch = vec![candidate(), ArticleCandidate::default(), candidate()];
        let first = normalize_all(batch.clone(), Provider::NewsApi);
        let second = normalize_all(batch, Provider::NewsApi);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}
