//! Catalog category entity.

use crate::domain::entities::ProductRecord;
use crate::utils::slug::title_from_slug;

/// A catalog category: a slug and its ordered product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub slug: String,
    pub products: Vec<ProductRecord>,
}

impl Category {
    pub fn new(slug: impl Into<String>, products: Vec<ProductRecord>) -> Self {
        Self {
            slug: slug.into(),
            products,
        }
    }

    /// Human-readable title derived from the slug.
    pub fn title(&self) -> String {
        title_from_slug(&self.slug)
    }

    /// Image of the first product, used as the category thumbnail.
    pub fn thumbnail(&self) -> Option<&str> {
        self.products.first().map(|p| p.image_ref.as_str())
    }
}

/// Listing entry for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub slug: String,
    pub title: String,
    pub product_count: usize,
    pub thumbnail: Option<String>,
}

impl From<&Category> for CategorySummary {
    fn from(category: &Category) -> Self {
        Self {
            slug: category.slug.clone(),
            title: category.title(),
            product_count: category.products.len(),
            thumbnail: category.thumbnail().map(str::to_string),
        }
    }
}
