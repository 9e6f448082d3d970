//! Top-level router configuration combining page, API and asset routes.
//!
//! # Route Structure
//!
//! - `GET  /`, `/about`, `/contact`, `/news-events`, `/products/detail` - HTML pages
//! - `POST /contact`     - Contact form submission (rate limited)
//! - `GET  /health`      - Health check: catalog, carousel rotation
//! - `/api/*`            - JSON API; `POST /api/contact` is rate limited
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket shared by both contact endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
///
/// The rate limiter keys on the peer address, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let form_limit = rate_limit::layer();

    let api_router = api::routes::public_routes()
        .merge(api::routes::form_routes().layer(form_limit.clone()));

    let web_router = web::routes::public_routes()
        .merge(web::routes::form_routes().layer(form_limit));

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
