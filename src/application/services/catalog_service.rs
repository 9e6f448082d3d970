//! Category resolution and catalog reads.

use serde_json::json;
use std::sync::Arc;

use crate::application::services::CategoryBrowser;
use crate::domain::entities::{Category, CategorySummary, ProductRecord};
use crate::domain::repositories::CatalogRepository;
use crate::error::AppError;
use crate::utils::slug::title_from_slug;

/// Category shown when the requested one is absent or unknown.
pub const DEFAULT_CATEGORY: &str = "lab-water-purification-system";

/// Number of categories listed under "Explore Other Categories".
pub const OTHER_CATEGORIES_LIMIT: usize = 3;

/// Outcome of resolving a requested category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// A slug guaranteed to be a catalog key.
    pub slug: &'a str,
    /// True when the request was absent or unknown and the default was used.
    pub fallback: bool,
}

/// Service for resolving categories and reading the catalog.
pub struct CatalogService<R: CatalogRepository> {
    repository: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a new catalog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Maps any identifier to a valid category slug.
    ///
    /// Known slugs are returned unchanged; absent or unknown ones resolve to
    /// [`DEFAULT_CATEGORY`]. Never fails.
    pub fn resolve<'a>(&'a self, requested: Option<&str>) -> Resolution<'a> {
        if let Some(category) = requested.and_then(|slug| self.repository.find(slug)) {
            return Resolution {
                slug: &category.slug,
                fallback: false,
            };
        }

        tracing::debug!(requested = ?requested, "Unknown category, using default");
        metrics::counter!("catalog_category_fallback_total").increment(1);

        Resolution {
            slug: DEFAULT_CATEGORY,
            fallback: true,
        }
    }

    /// Returns a category by exact slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is not a catalog key. Callers
    /// should pass slugs obtained from [`resolve`](Self::resolve).
    pub fn category(&self, slug: &str) -> Result<&Category, AppError> {
        self.repository
            .find(slug)
            .ok_or_else(|| AppError::not_found("Category not found", json!({ "slug": slug })))
    }

    /// Returns the ordered product list of a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the slug is not a catalog key.
    pub fn products(&self, slug: &str) -> Result<&[ProductRecord], AppError> {
        self.category(slug).map(|c| c.products.as_slice())
    }

    /// Lists all categories in declaration order.
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.repository
            .categories()
            .iter()
            .map(CategorySummary::from)
            .collect()
    }

    /// The first `limit` categories other than `slug`, in declaration order.
    pub fn other_categories(&self, slug: &str, limit: usize) -> Vec<CategorySummary> {
        self.repository
            .categories()
            .iter()
            .filter(|c| c.slug != slug)
            .take(limit)
            .map(CategorySummary::from)
            .collect()
    }

    pub fn category_title(&self, slug: &str) -> String {
        title_from_slug(slug)
    }

    /// Starts a browsing view on the resolved category.
    pub fn browse(&self, requested: Option<&str>) -> CategoryBrowser<'_, R> {
        CategoryBrowser::new(self, requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::catalog::StaticCatalog;
    use crate::infrastructure::catalog::builder::product;

    fn builtin() -> CatalogService<StaticCatalog> {
        CatalogService::new(Arc::new(StaticCatalog::builtin()))
    }

    #[test]
    fn test_known_slug_resolves_to_itself() {
        let service = builtin();
        for summary in service.categories() {
            let resolution = service.resolve(Some(&summary.slug));
            assert_eq!(resolution.slug, summary.slug);
            assert!(!resolution.fallback);
        }
    }

    #[test]
    fn test_unknown_and_absent_resolve_to_default() {
        let service = builtin();
        for requested in [
            None,
            Some(""),
            Some("nonexistent-category"),
            Some("water-quality-analyzer"),
            Some("ELECTROLYZERS"),
        ] {
            let resolution = service.resolve(requested);
            assert_eq!(resolution.slug, DEFAULT_CATEGORY, "requested = {requested:?}");
            assert!(resolution.fallback);
        }
    }

    #[test]
    fn test_electrolyzers_products_in_order() {
        let service = builtin();
        let names: Vec<_> = service
            .products("electrolyzers")
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();

        assert_eq!(
            names,
            ["Water Electrolyzers", "Hydrogen Generators", "Multi Cell Testing Hardware"]
        );
    }

    #[test]
    fn test_fallback_returns_default_list_unchanged() {
        let service = builtin();
        let resolution = service.resolve(Some("nonexistent-category"));

        let resolved = service.products(resolution.slug).unwrap();
        let default = service.products(DEFAULT_CATEGORY).unwrap();

        assert_eq!(resolved, default);
        assert_eq!(resolved[0].name, "Online TOC Analyzer BerryPURE TOC");
    }

    #[test]
    fn test_products_for_unknown_slug_is_not_found() {
        let service = builtin();
        let err = service.products("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_other_categories_skip_current() {
        let service = builtin();
        let others: Vec<_> = service
            .other_categories("raman-spectroscopy", OTHER_CATEGORIES_LIMIT)
            .into_iter()
            .map(|c| c.slug)
            .collect();

        assert_eq!(
            others,
            ["lab-water-purification-system", "lab-furniture", "electrolyzers"]
        );
    }

    #[test]
    fn test_category_summaries() {
        let service = builtin();
        let summaries = service.categories();

        assert_eq!(summaries.len(), 6);
        let stations = summaries
            .iter()
            .find(|c| c.slug == "electrolyzer-test-stations")
            .unwrap();
        assert_eq!(stations.title, "Electrolyzer Test Stations");
        assert_eq!(stations.product_count, 2);
        assert!(stations.thumbnail.as_deref().unwrap().ends_with(".png"));
    }

    #[test]
    fn test_custom_catalog_resolution() {
        let catalog = StaticCatalog::new(vec![
            Category::new(DEFAULT_CATEGORY, vec![product("A", "a").build()]),
            Category::new("extra", vec![product("B", "b").build()]),
        ]);
        let service = CatalogService::new(Arc::new(catalog));

        assert_eq!(service.resolve(Some("extra")).slug, "extra");
        assert_eq!(service.resolve(Some("other")).slug, DEFAULT_CATEGORY);
        assert_eq!(service.category_title("extra"), "Extra");
    }
}
