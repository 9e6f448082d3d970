//! API route configuration.
//!
//! Read endpoints are public; the contact endpoint is returned separately so
//! the caller can put it behind a rate limiter.

use crate::api::handlers::{
    carousel_handler, category_handler, category_list_handler, contact_handler,
    news_list_handler, resolve_category_handler, variant_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only catalog and content routes.
///
/// # Endpoints
///
/// - `GET /categories`                                           - Category summaries
/// - `GET /categories/resolve?product=<slug>`                    - Resolve a category identifier
/// - `GET /categories/{slug}`                                    - Category with products
/// - `GET /categories/{slug}/products/{item}/variants/{variant}` - Display fields of a variant
/// - `GET /news`                                                 - News feed (`?category=`)
/// - `GET /carousels/{name}`                                     - Carousel position
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category_list_handler))
        .route("/categories/resolve", get(resolve_category_handler))
        .route("/categories/{slug}", get(category_handler))
        .route(
            "/categories/{slug}/products/{item}/variants/{variant_id}",
            get(variant_handler),
        )
        .route("/news", get(news_list_handler))
        .route("/carousels/{name}", get(carousel_handler))
}

/// Form submission routes.
///
/// # Endpoints
///
/// - `POST /contact` - Submit a contact inquiry
pub fn form_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_handler))
}
