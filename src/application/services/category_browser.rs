//! View state for the product detail page.

use crate::application::services::CatalogService;
use crate::domain::entities::ProductRecord;
use crate::domain::repositories::CatalogRepository;
use crate::domain::variant_selector::{SelectionError, VariantSelector};

/// The category currently shown and one variant selector per product.
///
/// Navigating to another category rebuilds every selector, so each product
/// starts again on its first variant.
pub struct CategoryBrowser<'a, R: CatalogRepository> {
    service: &'a CatalogService<R>,
    slug: &'a str,
    fallback: bool,
    selectors: Vec<VariantSelector<'a>>,
}

impl<'a, R: CatalogRepository> CategoryBrowser<'a, R> {
    pub fn new(service: &'a CatalogService<R>, requested: Option<&str>) -> Self {
        let mut browser = Self {
            service,
            slug: "",
            fallback: false,
            selectors: Vec::new(),
        };
        browser.navigate(requested);
        browser
    }

    /// Switches to another category and resets all selections.
    pub fn navigate(&mut self, requested: Option<&str>) {
        let service = self.service;
        let resolution = service.resolve(requested);
        self.slug = resolution.slug;
        self.fallback = resolution.fallback;
        self.selectors = service
            .products(resolution.slug)
            .unwrap_or_default()
            .iter()
            .map(VariantSelector::new)
            .collect();
    }

    pub fn slug(&self) -> &'a str {
        self.slug
    }

    /// True when the requested category was unknown.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn title(&self) -> String {
        self.service.category_title(self.slug)
    }

    pub fn products(&self) -> impl Iterator<Item = &'a ProductRecord> + '_ {
        self.selectors.iter().map(VariantSelector::product)
    }

    pub fn selectors(&self) -> &[VariantSelector<'a>] {
        &self.selectors
    }

    /// Activates a variant of the product at position `item`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::NoSuchProduct`] if `item` is past the end of
    /// the list, or the selector's error if the id is unknown.
    pub fn select_variant(&mut self, item: usize, variant_id: &str) -> Result<(), SelectionError> {
        let len = self.selectors.len();
        self.selectors
            .get_mut(item)
            .ok_or(SelectionError::NoSuchProduct { item, len })?
            .select_by_id(variant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::catalog_service::DEFAULT_CATEGORY;
    use crate::infrastructure::catalog::StaticCatalog;
    use std::sync::Arc;

    fn service() -> CatalogService<StaticCatalog> {
        CatalogService::new(Arc::new(StaticCatalog::builtin()))
    }

    #[test]
    fn test_browser_starts_on_first_variants() {
        let service = service();
        let browser = service.browse(Some("electrolyzer-test-stations"));

        assert_eq!(browser.slug(), "electrolyzer-test-stations");
        assert!(!browser.is_fallback());
        assert_eq!(browser.selectors().len(), 2);
        assert!(browser.selectors().iter().all(|s| s.active_index() == 0));
    }

    #[test]
    fn test_select_pts10_changes_display() {
        let service = service();
        let mut browser = service.browse(Some("electrolyzer-test-stations"));
        let item = browser
            .products()
            .position(|p| p.name == "Fuel Cell Stations")
            .unwrap();

        browser.select_variant(item, "pts-10").unwrap();

        let display = browser.selectors()[item].display();
        assert!(display.description.starts_with("Designed for short-stack evaluation"));
        assert!(display.image_ref.ends_with("7.png"));
    }

    #[test]
    fn test_navigate_resets_selection() {
        let service = service();
        let mut browser = service.browse(Some("electrolyzer-test-stations"));
        let item = browser
            .products()
            .position(|p| p.has_variants())
            .unwrap();
        browser.select_variant(item, "pts-100").unwrap();

        browser.navigate(Some("electrolyzers"));
        browser.navigate(Some("electrolyzer-test-stations"));

        assert_eq!(browser.selectors()[item].active_index(), 0);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let service = service();
        let browser = service.browse(Some("nonexistent-category"));

        assert_eq!(browser.slug(), DEFAULT_CATEGORY);
        assert!(browser.is_fallback());
        assert_eq!(browser.title(), "Lab Water Purification System");
    }

    #[test]
    fn test_select_variant_errors() {
        let service = service();
        let mut browser = service.browse(Some("electrolyzers"));

        assert_eq!(
            browser.select_variant(99, "x"),
            Err(SelectionError::NoSuchProduct { item: 99, len: 3 })
        );
        assert_eq!(
            browser.select_variant(0, "x"),
            Err(SelectionError::UnknownVariant("x".to_string()))
        );
    }
}
