//! Terse constructors for catalog tables.

use crate::domain::entities::{Feature, IconKind, ProductRecord, VariantRecord};

/// Fluent builder used by the built-in catalog tables.
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    record: ProductRecord,
}

/// Starts a product with its name and tagline.
pub fn product(name: &str, tagline: &str) -> ProductBuilder {
    ProductBuilder {
        record: ProductRecord {
            name: name.to_string(),
            tagline: tagline.to_string(),
            description: String::new(),
            image_ref: String::new(),
            partner_name: String::new(),
            partner_logo_ref: None,
            external_link_ref: None,
            features: Vec::new(),
            specs: Vec::new(),
            variants: None,
        },
    }
}

impl ProductBuilder {
    pub fn description(mut self, description: &str) -> Self {
        self.record.description = description.to_string();
        self
    }

    pub fn image(mut self, image_ref: &str) -> Self {
        self.record.image_ref = image_ref.to_string();
        self
    }

    pub fn partner(mut self, name: &str, logo_ref: Option<&str>) -> Self {
        self.record.partner_name = name.to_string();
        self.record.partner_logo_ref = logo_ref.map(str::to_string);
        self
    }

    pub fn link(mut self, external_link_ref: &str) -> Self {
        self.record.external_link_ref = Some(external_link_ref.to_string());
        self
    }

    pub fn feature(mut self, icon: IconKind, title: &str, desc: &str) -> Self {
        self.record.features.push(Feature::new(icon, title, desc));
        self
    }

    pub fn specs<const N: usize>(mut self, specs: [&str; N]) -> Self {
        self.record.specs = specs.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn variant(
        mut self,
        id: &str,
        name: &str,
        description: &str,
        image_ref: &str,
        external_link_ref: &str,
    ) -> Self {
        self.record
            .variants
            .get_or_insert_with(Vec::new)
            .push(VariantRecord {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                image_ref: image_ref.to_string(),
                external_link_ref: external_link_ref.to_string(),
            });
        self
    }

    pub fn build(self) -> ProductRecord {
        self.record
    }
}
