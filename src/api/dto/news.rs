//! DTOs for the news feed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::NewsItem;

/// Query parameters of `GET /api/news`.
#[derive(Debug, Default, Deserialize)]
pub struct NewsParams {
    /// Category label or slug, e.g. `Event` or `product-launch`.
    #[serde(default)]
    pub category: Option<String>,
}

/// A single news entry.
#[derive(Debug, Serialize)]
pub struct NewsItemDto {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub display_date: String,
    pub category: String,
    pub image_ref: String,
    pub read_time: String,
}

impl From<&NewsItem> for NewsItemDto {
    fn from(item: &NewsItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            excerpt: item.excerpt.clone(),
            date: item.date,
            display_date: item.display_date(),
            category: item.category.label().to_string(),
            image_ref: item.image_ref.clone(),
            read_time: item.read_time.clone(),
        }
    }
}

/// News entries, newest first.
#[derive(Debug, Serialize)]
pub struct NewsListResponse {
    pub total: usize,
    pub items: Vec<NewsItemDto>,
}
