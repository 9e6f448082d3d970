//! Active-variant tracking for a single product.
//!
//! A [`VariantSelector`] borrows a [`ProductRecord`] and holds the index of the
//! active variant. Display fields are derived from the active variant, falling
//! back to the product's own fields when the variant leaves one empty.
//!
//! The index always stays within `[0, len)`: rejected selections leave the
//! state untouched.

use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::{DisplayFields, ProductRecord};

/// Errors raised by invalid selections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("variant index {index} is out of range for {len} variants")]
    OutOfRange { index: usize, len: usize },

    #[error("unknown variant id: {0}")]
    UnknownVariant(String),

    #[error("product {item} is out of range for {len} products")]
    NoSuchProduct { item: usize, len: usize },
}

/// One selector control per variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOption<'a> {
    pub index: usize,
    pub id: &'a str,
    pub label: &'a str,
    pub active: bool,
}

/// Tracks the active variant of one product.
#[derive(Debug, Clone)]
pub struct VariantSelector<'a> {
    product: &'a ProductRecord,
    active: usize,
}

impl<'a> VariantSelector<'a> {
    /// Creates a selector positioned on the first variant.
    pub fn new(product: &'a ProductRecord) -> Self {
        Self { product, active: 0 }
    }

    pub fn product(&self) -> &'a ProductRecord {
        self.product
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.product.variants().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Makes the variant at `index` active.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfRange`] when `index >= len`, including
    /// every index for a product without variants.
    pub fn select(&mut self, index: usize) -> Result<(), SelectionError> {
        let len = self.len();
        if index >= len {
            return Err(SelectionError::OutOfRange { index, len });
        }
        self.active = index;
        Ok(())
    }

    /// Makes the variant with the given id active.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::UnknownVariant`] if no variant has that id.
    pub fn select_by_id(&mut self, id: &str) -> Result<(), SelectionError> {
        let index = self
            .product
            .variant_position(id)
            .ok_or_else(|| SelectionError::UnknownVariant(id.to_string()))?;
        self.select(index)
    }

    /// Returns to the first variant.
    pub fn reset(&mut self) {
        self.active = 0;
    }

    /// Fields to display for the current selection.
    pub fn display(&self) -> DisplayFields<'a> {
        let product = self.product;
        let base_link = product.external_link_ref.as_deref();

        match product.variants().get(self.active) {
            None => DisplayFields {
                image_ref: &product.image_ref,
                description: &product.description,
                external_link_ref: base_link,
            },
            Some(variant) => DisplayFields {
                image_ref: non_empty_or(&variant.image_ref, &product.image_ref),
                description: non_empty_or(&variant.description, &product.description),
                external_link_ref: if variant.external_link_ref.is_empty() {
                    base_link
                } else {
                    Some(variant.external_link_ref.as_str())
                },
            },
        }
    }

    /// Selector controls, in variant order.
    pub fn options(&self) -> Vec<VariantOption<'a>> {
        self.product
            .variants()
            .iter()
            .enumerate()
            .map(|(index, v)| VariantOption {
                index,
                id: &v.id,
                label: &v.name,
                active: index == self.active,
            })
            .collect()
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VariantRecord;

    fn base_product(variants: Option<Vec<VariantRecord>>) -> ProductRecord {
        ProductRecord {
            name: "Fuel Cell Stations".to_string(),
            tagline: "Comprehensive Stack Analysis".to_string(),
            description: "base description".to_string(),
            image_ref: "https://example.com/base.png".to_string(),
            partner_name: "LEANCAT".to_string(),
            partner_logo_ref: None,
            external_link_ref: Some("https://example.com/base".to_string()),
            features: vec![],
            specs: vec![],
            variants,
        }
    }

    fn variant(id: &str, description: &str, image: &str, link: &str) -> VariantRecord {
        VariantRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: description.to_string(),
            image_ref: image.to_string(),
            external_link_ref: link.to_string(),
        }
    }

    fn two_variants() -> ProductRecord {
        base_product(Some(vec![
            variant("v1", "first", "https://example.com/1.png", "https://example.com/1"),
            variant("v2", "second", "https://example.com/2.png", "https://example.com/2"),
        ]))
    }

    #[test]
    fn test_without_variants_uses_base_fields() {
        let product = base_product(None);
        let selector = VariantSelector::new(&product);

        let fields = selector.display();
        assert_eq!(fields.description, "base description");
        assert_eq!(fields.image_ref, "https://example.com/base.png");
        assert_eq!(fields.external_link_ref, Some("https://example.com/base"));
        assert!(selector.options().is_empty());
    }

    #[test]
    fn test_empty_variant_list_uses_base_fields() {
        let product = base_product(Some(vec![]));
        let selector = VariantSelector::new(&product);

        assert_eq!(selector.display().description, "base description");
    }

    #[test]
    fn test_defaults_to_first_variant() {
        let product = two_variants();
        let selector = VariantSelector::new(&product);

        assert_eq!(selector.active_index(), 0);
        assert_eq!(selector.display().description, "first");
    }

    #[test]
    fn test_select_changes_display_fields() {
        let product = two_variants();
        let mut selector = VariantSelector::new(&product);

        selector.select(1).unwrap();

        let fields = selector.display();
        assert_eq!(fields.description, "second");
        assert_eq!(fields.image_ref, "https://example.com/2.png");
        assert_eq!(fields.external_link_ref, Some("https://example.com/2"));
    }

    #[test]
    fn test_out_of_range_selection_keeps_state() {
        let product = two_variants();
        let mut selector = VariantSelector::new(&product);
        selector.select(1).unwrap();

        let err = selector.select(2).unwrap_err();

        assert_eq!(err, SelectionError::OutOfRange { index: 2, len: 2 });
        assert_eq!(selector.active_index(), 1);
    }

    #[test]
    fn test_select_on_product_without_variants_fails() {
        let product = base_product(None);
        let mut selector = VariantSelector::new(&product);

        assert!(selector.select(0).is_err());
        assert_eq!(selector.active_index(), 0);
    }

    #[test]
    fn test_empty_variant_fields_fall_back_to_base() {
        let product = base_product(Some(vec![variant("bare", "", "", "")]));
        let selector = VariantSelector::new(&product);

        let fields = selector.display();
        assert_eq!(fields.description, "base description");
        assert_eq!(fields.image_ref, "https://example.com/base.png");
        assert_eq!(fields.external_link_ref, Some("https://example.com/base"));
    }

    #[test]
    fn test_select_by_id_and_reset() {
        let product = two_variants();
        let mut selector = VariantSelector::new(&product);

        selector.select_by_id("v2").unwrap();
        assert_eq!(selector.active_index(), 1);

        assert_eq!(
            selector.select_by_id("nope"),
            Err(SelectionError::UnknownVariant("nope".to_string()))
        );
        assert_eq!(selector.active_index(), 1);

        selector.reset();
        assert_eq!(selector.active_index(), 0);
    }

    #[test]
    fn test_options_mark_active() {
        let product = two_variants();
        let mut selector = VariantSelector::new(&product);
        selector.select(1).unwrap();

        let options = selector.options();
        assert_eq!(options.len(), 2);
        assert!(!options[0].active);
        assert!(options[1].active);
        assert_eq!(options[1].label, "V2");
    }

    #[test]
    fn test_every_index_in_range_is_selectable() {
        let product = two_variants();
        let mut selector = VariantSelector::new(&product);

        for k in 0..selector.len() {
            selector.select(k).unwrap();
            assert_eq!(selector.display().description, product.variants()[k].description);
        }
    }
}
