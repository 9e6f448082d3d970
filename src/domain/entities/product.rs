//! Catalog entities: products, their variants and feature cards.

use serde::Serialize;

use crate::domain::entities::IconKind;

/// A single feature card shown under a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub icon: IconKind,
    pub title: String,
    pub desc: String,
}

impl Feature {
    pub fn new(icon: IconKind, title: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            desc: desc.into(),
        }
    }
}

/// A selectable model of a product (e.g. `PTS-1`, `PTS-10`).
///
/// Empty fields are allowed and mean "use the parent product's value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantRecord {
    /// Identifier, unique within the parent product.
    pub id: String,
    /// Short label rendered on the selector control.
    pub name: String,
    pub description: String,
    pub image_ref: String,
    pub external_link_ref: String,
}

/// A product as listed within a catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub image_ref: String,
    pub partner_name: String,
    pub partner_logo_ref: Option<String>,
    pub external_link_ref: Option<String>,
    pub features: Vec<Feature>,
    pub specs: Vec<String>,
    pub variants: Option<Vec<VariantRecord>>,
}

impl ProductRecord {
    /// Returns the variant list, treating an absent list as empty.
    pub fn variants(&self) -> &[VariantRecord] {
        self.variants.as_deref().unwrap_or_default()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants().is_empty()
    }

    /// Looks up a variant position by its id.
    pub fn variant_position(&self, id: &str) -> Option<usize> {
        self.variants().iter().position(|v| v.id == id)
    }
}

/// Fields shown for a product after applying the active variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayFields<'a> {
    pub image_ref: &'a str,
    pub description: &'a str,
    pub external_link_ref: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(variants: Option<Vec<VariantRecord>>) -> ProductRecord {
        ProductRecord {
            name: "Fume Hood".to_string(),
            tagline: "Operator Safety Priority".to_string(),
            description: "Containment system".to_string(),
            image_ref: "https://example.com/hood.jpeg".to_string(),
            partner_name: "4 more Labor".to_string(),
            partner_logo_ref: Some("/4more.png".to_string()),
            external_link_ref: None,
            features: vec![Feature::new(IconKind::Shield, "Airflow Monitor", "Digital display")],
            specs: vec!["Width: 4ft".to_string()],
            variants,
        }
    }

    fn variant(id: &str) -> VariantRecord {
        VariantRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            image_ref: String::new(),
            external_link_ref: String::new(),
        }
    }

    #[test]
    fn test_absent_variants_read_as_empty() {
        let p = product(None);
        assert!(p.variants().is_empty());
        assert!(!p.has_variants());
    }

    #[test]
    fn test_empty_variant_list_has_no_variants() {
        assert!(!product(Some(vec![])).has_variants());
    }

    #[test]
    fn test_variant_position() {
        let p = product(Some(vec![variant("a"), variant("b")]));
        assert_eq!(p.variant_position("b"), Some(1));
        assert_eq!(p.variant_position("zzz"), None);
    }
}
