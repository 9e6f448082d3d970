//! Category page listing every product of a catalog category.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::application::services::catalog_service::OTHER_CATEGORIES_LIMIT;
use crate::domain::entities::{CategorySummary, DisplayFields, ProductRecord};
use crate::domain::variant_selector::VariantSelector;
use crate::state::AppState;
use crate::web::view::{Layout, parse_index, product_detail_href};

/// Partner whose logo is followed by its name in text.
const NAMED_LOGO_PARTNER: &str = "4 more Labor";

/// Query parameters of the category page.
///
/// `item` and `variant` select a model for one product section; both are
/// needed for the selection to apply.
#[derive(Debug, Default, Deserialize)]
pub struct ProductDetailParams {
    #[serde(default)]
    pub product: Option<String>,

    #[serde(default)]
    pub item: Option<String>,

    #[serde(default)]
    pub variant: Option<String>,
}

/// A model selector control.
#[derive(Debug, Clone)]
pub struct VariantLink {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// One product section, image and text alternating sides.
pub struct ProductSection<'a> {
    pub product: &'a ProductRecord,
    pub display: DisplayFields<'a>,
    pub variants: Vec<VariantLink>,
    pub image_first: bool,
}

impl ProductSection<'_> {
    pub fn shows_partner_name_after_logo(&self) -> bool {
        self.product.partner_name == NAMED_LOGO_PARTNER
    }

    pub fn know_more_href(&self) -> &str {
        self.display.external_link_ref.unwrap_or("#")
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "product_detail.html")]
pub struct ProductDetailTemplate<'a> {
    pub layout: Layout,
    pub title: String,
    pub sections: Vec<ProductSection<'a>>,
    pub other_categories: Vec<CategorySummary>,
}

impl ProductDetailTemplate<'_> {
    pub fn category_href(&self, slug: &str) -> String {
        product_detail_href(slug, None)
    }
}

/// Renders a catalog category.
///
/// # Endpoint
///
/// `GET /products/detail?product=<slug>[&item=<n>&variant=<id>]`
///
/// A missing or unknown `product` shows the default category. An invalid
/// selection is ignored and the section keeps its first model.
pub async fn product_detail_handler(
    State(state): State<AppState>,
    Query(params): Query<ProductDetailParams>,
) -> Response {
    let catalog = &state.catalog_service;
    let mut browser = catalog.browse(params.product.as_deref());

    let item = parse_index("item", params.item.as_deref());
    if let (Some(item), Some(variant)) = (item, params.variant.as_deref())
        && let Err(e) = browser.select_variant(item, variant)
    {
        tracing::debug!(error = %e, item, variant, "Ignoring variant selection");
    }

    let slug = browser.slug();
    let sections = browser
        .selectors()
        .iter()
        .enumerate()
        .map(|(item, selector)| section(slug, item, selector))
        .collect();

    ProductDetailTemplate {
        layout: Layout::new(&state, browser.title(), "products"),
        title: browser.title(),
        sections,
        other_categories: catalog.other_categories(slug, OTHER_CATEGORIES_LIMIT),
    }
    .into_response()
}

fn section<'a>(slug: &str, item: usize, selector: &VariantSelector<'a>) -> ProductSection<'a> {
    let variants = selector
        .options()
        .into_iter()
        .map(|option| VariantLink {
            label: option.label.to_string(),
            href: product_detail_href(slug, Some((item, option.id))),
            active: option.active,
        })
        .collect();

    ProductSection {
        product: selector.product(),
        display: selector.display(),
        variants,
        image_first: item % 2 == 1,
    }
}
