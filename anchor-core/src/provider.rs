//! Upstream news provider definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported upstream news providers
///
/// The derived ordering is the concatenation order used when merging
/// results: NewsAPI articles come before GNews articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Provider {
    /// NewsAPI (newsapi.org) - headline and "everything" search API
    #[serde(rename = "NewsAPI")]
    NewsApi,
    /// GNews (gnews.io) - headline and search API
    #[serde(rename = "GNews")]
    GNews,
}

impl Provider {
    /// All providers, in concatenation order
    pub const ALL: [Provider; 2] = [Provider::NewsApi, Provider::GNews];

    /// Get the full display name (also the article `provider` field)
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::NewsApi => "NewsAPI",
            Provider::GNews => "GNews",
        }
    }

    /// Key used for this provider in per-source tallies
    pub fn tally_key(&self) -> &'static str {
        match self {
            Provider::NewsApi => "newsApi",
            Provider::GNews => "gnews",
        }
    }

    /// Word marking an article whose content was taken down upstream.
    ///
    /// Matched case-insensitively as a substring of title or description.
    pub fn removal_sentinel(&self) -> Option<&'static str> {
        match self {
            Provider::NewsApi => Some("removed"),
            Provider::GNews => None,
        }
    }

    /// Default number of articles requested per query
    pub fn default_page_size(&self) -> u32 {
        match self {
            Provider::NewsApi => 20,
            Provider::GNews => 10,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newsapi" | "news_api" | "news-api" => Ok(Provider::NewsApi),
            "gnews" | "g-news" => Ok(Provider::GNews),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}
