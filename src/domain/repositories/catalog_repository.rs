//! Read-only access to the product catalog.

use crate::domain::entities::Category;

/// Repository interface for the product catalog.
///
/// The catalog is populated once and never mutated, so every method is a
/// synchronous, side-effect-free read.
///
/// # Implementations
///
/// - [`crate::infrastructure::catalog::StaticCatalog`] - built-in catalog tables
pub trait CatalogRepository: Send + Sync {
    /// Finds a category by slug in constant time.
    fn find(&self, slug: &str) -> Option<&Category>;

    /// All categories in declaration order.
    fn categories(&self) -> &[Category];

    /// Returns whether `slug` is a catalog key.
    fn contains(&self, slug: &str) -> bool {
        self.find(slug).is_some()
    }
}
