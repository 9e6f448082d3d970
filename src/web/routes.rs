//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    about_handler, contact_page_handler, contact_submit_handler, home_handler, news_handler,
    product_detail_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Read-only pages.
///
/// # Endpoints
///
/// - `GET /` - Home
/// - `GET /about` - Company story and values
/// - `GET /contact` - Contact form
/// - `GET /news-events` - News & Events
/// - `GET /products/detail` - Catalog category page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/about", get(about_handler))
        .route("/contact", get(contact_page_handler))
        .route("/news-events", get(news_handler))
        .route("/products/detail", get(product_detail_handler))
}

/// Form submissions, rate limited by the caller.
///
/// # Endpoints
///
/// - `POST /contact` - Submit the contact form
pub fn form_routes() -> Router<AppState> {
    Router::new().route("/contact", post(contact_submit_handler))
}
