//! Handler for carousel positions.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::carousel::CarouselResponse;
use crate::application::services::CarouselName;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the shared position of a rotating carousel.
///
/// # Endpoint
///
/// `GET /api/carousels/{name}` where `name` is `hero` or `showcase`
///
/// # Errors
///
/// Returns 404 Not Found for any other name.
pub async fn carousel_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CarouselResponse>, AppError> {
    let name: CarouselName = name
        .parse()
        .map_err(|_| AppError::not_found("Carousel not found", json!({ "name": name })))?;

    let content = state.content_service.content();
    let slides = match name {
        CarouselName::Hero => content
            .hero_slides
            .iter()
            .map(|s| s.image_ref.clone())
            .collect(),
        CarouselName::Showcase => content.showcase_images.clone(),
    };

    let position = state.rotation_service.position(name);

    Ok(Json(CarouselResponse {
        name,
        current: position.current(),
        next: position.peek_next(),
        prev: position.peek_prev(),
        len: position.len(),
        cadence_secs: state.rotation_service.cadence(name).as_secs(),
        slides,
    }))
}
