//! Read access to the static page content.

use std::sync::Arc;

use crate::domain::entities::{NewsCategory, NewsItem, SiteContent};

/// Service serving page content and the news feed.
pub struct ContentService {
    content: Arc<SiteContent>,
}

impl ContentService {
    pub fn new(content: Arc<SiteContent>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// News items newest first, optionally restricted to one category.
    pub fn news(&self, category: Option<NewsCategory>) -> Vec<&NewsItem> {
        let mut items: Vec<&NewsItem> = self
            .content
            .news
            .iter()
            .filter(|item| category.is_none_or(|c| item.category == c))
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::content::builtin_content;

    fn service() -> ContentService {
        ContentService::new(Arc::new(builtin_content()))
    }

    #[test]
    fn test_news_sorted_newest_first() {
        let service = service();
        let news = service.news(None);

        assert_eq!(news.len(), 6);
        assert!(news.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(news[0].id, 1);
    }

    #[test]
    fn test_news_category_filter() {
        let service = service();
        let events = service.news(Some(NewsCategory::Event));

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Scientific Square Exhibits at Analytica India 2024");
    }

    #[test]
    fn test_empty_content() {
        let service = ContentService::new(Arc::new(SiteContent::default()));
        assert!(service.news(None).is_empty());
    }
}
