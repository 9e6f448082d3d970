//! In-memory catalog built once at startup.

use std::collections::{HashMap, HashSet};

use thiserror::Error;
use url::Url;

use super::data::builtin_categories;
use crate::domain::entities::Category;
use crate::domain::repositories::CatalogRepository;

/// Integrity problems detected by [`StaticCatalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("default category '{0}' is missing")]
    MissingDefault(String),

    #[error("category '{0}' is declared more than once")]
    DuplicateCategory(String),

    #[error("category '{0}' has no products")]
    EmptyCategory(String),

    #[error("product '{product}' appears more than once in '{category}'")]
    DuplicateProduct { category: String, product: String },

    #[error("variant '{variant}' appears more than once in product '{product}'")]
    DuplicateVariant { product: String, variant: String },

    #[error("product '{product}' has an invalid reference: {reference}")]
    InvalidReference { product: String, reference: String },
}

/// Catalog backed by in-memory tables.
///
/// Categories keep their declaration order; lookups by slug go through a
/// hash index. When a slug is declared twice the first declaration wins and
/// [`validate`](Self::validate) reports the duplicate.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl StaticCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        let mut index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            index.entry(category.slug.clone()).or_insert(position);
        }
        Self { categories, index }
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self::new(builtin_categories())
    }

    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }

    /// Checks the invariants the rest of the site relies on.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found.
    pub fn validate(&self, default_slug: &str) -> Result<(), CatalogError> {
        if !self.index.contains_key(default_slug) {
            return Err(CatalogError::MissingDefault(default_slug.to_string()));
        }

        let mut seen_slugs = HashSet::new();
        for category in &self.categories {
            if !seen_slugs.insert(category.slug.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.slug.clone()));
            }
            if category.products.is_empty() {
                return Err(CatalogError::EmptyCategory(category.slug.clone()));
            }

            let mut seen_names = HashSet::new();
            for product in &category.products {
                if !seen_names.insert(product.name.as_str()) {
                    return Err(CatalogError::DuplicateProduct {
                        category: category.slug.clone(),
                        product: product.name.clone(),
                    });
                }

                let mut seen_variants = HashSet::new();
                for variant in product.variants() {
                    if !seen_variants.insert(variant.id.as_str()) {
                        return Err(CatalogError::DuplicateVariant {
                            product: product.name.clone(),
                            variant: variant.id.clone(),
                        });
                    }
                }

                let references = std::iter::once(product.image_ref.as_str())
                    .chain(product.partner_logo_ref.as_deref())
                    .chain(product.external_link_ref.as_deref())
                    .chain(product.variants().iter().flat_map(|v| {
                        [v.image_ref.as_str(), v.external_link_ref.as_str()]
                    }))
                    .filter(|r| !r.is_empty());

                for reference in references {
                    if !is_valid_reference(reference) {
                        return Err(CatalogError::InvalidReference {
                            product: product.name.clone(),
                            reference: reference.to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogRepository for StaticCatalog {
    fn find(&self, slug: &str) -> Option<&Category> {
        self.index.get(slug).map(|&i| &self.categories[i])
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Accepts absolute http(s) URLs and site-relative paths.
fn is_valid_reference(reference: &str) -> bool {
    if reference.starts_with('/') && !reference.starts_with("//") {
        return true;
    }
    Url::parse(reference)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}
