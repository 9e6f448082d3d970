//! Handlers for catalog browsing.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::catalog::{
    CategoryListResponse, CategoryResponse, CategorySummaryDto, ProductDto, ResolutionResponse,
    ResolveParams, VariantOptionDto, VariantSelectionResponse,
};
use crate::application::services::DEFAULT_CATEGORY;
use crate::application::services::catalog_service::OTHER_CATEGORIES_LIMIT;
use crate::domain::variant_selector::SelectionError;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories in catalog order.
///
/// # Endpoint
///
/// `GET /api/categories`
pub async fn category_list_handler(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let categories = state
        .catalog_service
        .categories()
        .into_iter()
        .map(CategorySummaryDto::from)
        .collect();

    Json(CategoryListResponse {
        default: DEFAULT_CATEGORY,
        categories,
    })
}

/// Resolves a category identifier.
///
/// # Endpoint
///
/// `GET /api/categories/resolve?product=<slug>`
///
/// Never fails: absent or unknown identifiers resolve to the default
/// category with `fallback: true`.
pub async fn resolve_category_handler(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Json<ResolutionResponse> {
    let resolution = state.catalog_service.resolve(params.product.as_deref());

    Json(ResolutionResponse {
        slug: resolution.slug.to_string(),
        title: state.catalog_service.category_title(resolution.slug),
        fallback: resolution.fallback,
        requested: params.product,
    })
}

/// Returns a category with its products and their default display fields.
///
/// # Endpoint
///
/// `GET /api/categories/{slug}`
///
/// Unknown slugs resolve to the default category, as on the product page.
pub async fn category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Json<CategoryResponse> {
    let catalog = &state.catalog_service;
    let browser = catalog.browse(Some(&slug));

    let products = browser
        .selectors()
        .iter()
        .enumerate()
        .map(|(item, selector)| ProductDto::from_selector(item, selector))
        .collect();

    let other_categories = catalog
        .other_categories(browser.slug(), OTHER_CATEGORIES_LIMIT)
        .into_iter()
        .map(CategorySummaryDto::from)
        .collect();

    Json(CategoryResponse {
        slug: browser.slug().to_string(),
        title: browser.title(),
        fallback: browser.is_fallback(),
        products,
        other_categories,
    })
}

/// Returns the display fields of one product with a variant selected.
///
/// # Endpoint
///
/// `GET /api/categories/{slug}/products/{item}/variants/{variant_id}`
///
/// `item` is the product's position within the resolved category.
///
/// # Errors
///
/// Returns 404 Not Found if the item or the variant does not exist.
pub async fn variant_handler(
    State(state): State<AppState>,
    Path((slug, item, variant_id)): Path<(String, usize, String)>,
) -> Result<Json<VariantSelectionResponse>, AppError> {
    let mut browser = state.catalog_service.browse(Some(&slug));

    browser
        .select_variant(item, &variant_id)
        .map_err(|e| selection_not_found(&e, browser.slug(), item, &variant_id))?;

    let selector = &browser.selectors()[item];
    let variant = selector
        .options()
        .into_iter()
        .find(|o| o.active)
        .map(VariantOptionDto::from)
        .ok_or_else(|| AppError::internal("Selected variant missing", json!({})))?;

    Ok(Json(VariantSelectionResponse {
        category: browser.slug().to_string(),
        item,
        product: selector.product().name.clone(),
        variant,
        display: selector.display().into(),
    }))
}

fn selection_not_found(e: &SelectionError, category: &str, item: usize, variant: &str) -> AppError {
    let message = match e {
        SelectionError::NoSuchProduct { .. } => "Product not found",
        SelectionError::UnknownVariant(_) | SelectionError::OutOfRange { .. } => {
            "Variant not found"
        }
    };
    AppError::not_found(
        message,
        json!({
            "category": category,
            "item": item,
            "variant": variant,
            "reason": e.to_string(),
        }),
    )
}
