//! DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CategorySummary, DisplayFields, Feature, IconKind, ProductRecord};
use crate::domain::variant_selector::{VariantOption, VariantSelector};

/// Query parameters carrying a requested category.
#[derive(Debug, Default, Deserialize)]
pub struct ResolveParams {
    #[serde(default)]
    pub product: Option<String>,
}

/// Result of resolving a category identifier.
#[derive(Debug, Serialize)]
pub struct ResolutionResponse {
    pub requested: Option<String>,
    pub slug: String,
    pub title: String,
    pub fallback: bool,
}

/// A category in listings.
#[derive(Debug, Serialize)]
pub struct CategorySummaryDto {
    pub slug: String,
    pub title: String,
    pub product_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<CategorySummary> for CategorySummaryDto {
    fn from(summary: CategorySummary) -> Self {
        Self {
            slug: summary.slug,
            title: summary.title,
            product_count: summary.product_count,
            thumbnail: summary.thumbnail,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub default: &'static str,
    pub categories: Vec<CategorySummaryDto>,
}

/// What a product section shows for the active selection.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayDto {
    pub image_ref: String,
    pub description: String,
    pub external_link_ref: Option<String>,
}

impl From<DisplayFields<'_>> for DisplayDto {
    fn from(fields: DisplayFields<'_>) -> Self {
        Self {
            image_ref: fields.image_ref.to_string(),
            description: fields.description.to_string(),
            external_link_ref: fields.external_link_ref.map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeatureDto {
    pub icon: IconKind,
    pub title: String,
    pub desc: String,
}

impl From<&Feature> for FeatureDto {
    fn from(feature: &Feature) -> Self {
        Self {
            icon: feature.icon,
            title: feature.title.clone(),
            desc: feature.desc.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VariantOptionDto {
    pub index: usize,
    pub id: String,
    pub label: String,
    pub active: bool,
}

impl From<VariantOption<'_>> for VariantOptionDto {
    fn from(option: VariantOption<'_>) -> Self {
        Self {
            index: option.index,
            id: option.id.to_string(),
            label: option.label.to_string(),
            active: option.active,
        }
    }
}

/// One product of a category with its current display fields.
#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub item: usize,
    pub name: String,
    pub tagline: String,
    pub partner_name: String,
    pub partner_logo_ref: Option<String>,
    pub features: Vec<FeatureDto>,
    pub specs: Vec<String>,
    pub variants: Vec<VariantOptionDto>,
    pub display: DisplayDto,
}

impl ProductDto {
    pub fn from_selector(item: usize, selector: &VariantSelector<'_>) -> Self {
        let product: &ProductRecord = selector.product();
        Self {
            item,
            name: product.name.clone(),
            tagline: product.tagline.clone(),
            partner_name: product.partner_name.clone(),
            partner_logo_ref: product.partner_logo_ref.clone(),
            features: product.features.iter().map(FeatureDto::from).collect(),
            specs: product.specs.clone(),
            variants: selector
                .options()
                .into_iter()
                .map(VariantOptionDto::from)
                .collect(),
            display: selector.display().into(),
        }
    }
}

/// A resolved category with its products.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub slug: String,
    pub title: String,
    pub fallback: bool,
    pub products: Vec<ProductDto>,
    pub other_categories: Vec<CategorySummaryDto>,
}

/// Display fields for one selected variant.
#[derive(Debug, Serialize)]
pub struct VariantSelectionResponse {
    pub category: String,
    pub item: usize,
    pub product: String,
    pub variant: VariantOptionDto,
    pub display: DisplayDto,
}
