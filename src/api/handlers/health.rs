//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::DEFAULT_CATEGORY;
use crate::domain::repositories::CatalogRepository;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Catalog**: Default category present and integrity rules hold
/// 2. **Rotation**: No carousel ticker has stopped unexpectedly
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": { "status": "ok", "message": "6 categories, 19 products" },
///     "rotation": { "status": "ok", "message": "running" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);
    let rotation_check = check_rotation(&state);

    let all_healthy = catalog_check.is_ok() && rotation_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            rotation: rotation_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Runs the catalog integrity checks.
fn check_catalog(state: &AppState) -> CheckStatus {
    let catalog = state.catalog_service.repository();
    match catalog.validate(DEFAULT_CATEGORY) {
        Ok(()) => CheckStatus::ok(format!(
            "{} categories, {} products",
            catalog.categories().len(),
            catalog.product_count()
        )),
        Err(e) => CheckStatus::error(format!("Catalog error: {e}")),
    }
}

/// Reports whether the carousel tickers are alive.
fn check_rotation(state: &AppState) -> CheckStatus {
    let rotation = &state.rotation_service;
    if rotation.has_failed() {
        CheckStatus::error("Carousel ticker stopped")
    } else if rotation.is_running() {
        CheckStatus::ok("running")
    } else {
        CheckStatus::ok("idle")
    }
}
