//! News and events entries.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Category badge of a news entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NewsCategory {
    Partnership,
    #[serde(rename = "Product Launch")]
    ProductLaunch,
    Event,
    Workshop,
    Achievement,
    Expansion,
}

impl NewsCategory {
    pub const ALL: [NewsCategory; 6] = [
        Self::Partnership,
        Self::ProductLaunch,
        Self::Event,
        Self::Workshop,
        Self::Achievement,
        Self::Expansion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Partnership => "Partnership",
            Self::ProductLaunch => "Product Launch",
            Self::Event => "Event",
            Self::Workshop => "Workshop",
            Self::Achievement => "Achievement",
            Self::Expansion => "Expansion",
        }
    }

    /// CSS modifier used for the badge colour.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Partnership => "badge-gold",
            Self::ProductLaunch => "badge-lavender",
            Self::Event => "badge-green",
            Self::Workshop => "badge-blue",
            Self::Achievement => "badge-amber",
            Self::Expansion => "badge-purple",
        }
    }

    /// Parses an optional category filter. A missing or blank value means
    /// every category.
    pub fn parse_filter(raw: Option<&str>) -> Result<Option<Self>, UnknownNewsCategory> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a news category label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown news category: {0}")]
pub struct UnknownNewsCategory(pub String);

impl FromStr for NewsCategory {
    type Err = UnknownNewsCategory;

    /// Accepts the display label or a slug form (`product-launch`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_ascii_lowercase() == normalized)
            .ok_or_else(|| UnknownNewsCategory(s.to_string()))
    }
}

/// A news or event entry shown on the news page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub category: NewsCategory,
    pub image_ref: String,
    pub read_time: String,
}

impl NewsItem {
    /// Formats the publication date as `Jan 15, 2024`.
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        let item = NewsItem {
            id: 1,
            title: "t".to_string(),
            excerpt: "e".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category: NewsCategory::Event,
            image_ref: String::new(),
            read_time: "3 min read".to_string(),
        };
        assert_eq!(item.display_date(), "Jan 5, 2024");
    }

    #[test]
    fn test_category_from_label_and_slug() {
        assert_eq!(
            "Product Launch".parse::<NewsCategory>(),
            Ok(NewsCategory::ProductLaunch)
        );
        assert_eq!(
            "product-launch".parse::<NewsCategory>(),
            Ok(NewsCategory::ProductLaunch)
        );
        assert_eq!("EVENT".parse::<NewsCategory>(), Ok(NewsCategory::Event));
        assert!("Gossip".parse::<NewsCategory>().is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(NewsCategory::parse_filter(None), Ok(None));
        assert_eq!(NewsCategory::parse_filter(Some("  ")), Ok(None));
        assert_eq!(
            NewsCategory::parse_filter(Some("workshop")),
            Ok(Some(NewsCategory::Workshop))
        );
        assert_eq!(
            NewsCategory::parse_filter(Some("Gossip")),
            Err(UnknownNewsCategory("Gossip".to_string()))
        );
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_value(NewsCategory::ProductLaunch).unwrap();
        assert_eq!(json, "Product Launch");
    }
}
