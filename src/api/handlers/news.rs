//! Handler for the news feed.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::news::{NewsItemDto, NewsListResponse, NewsParams};
use crate::domain::entities::NewsCategory;
use crate::error::AppError;
use crate::state::AppState;

/// Lists news entries, newest first.
///
/// # Endpoint
///
/// `GET /api/news`
///
/// # Query Parameters
///
/// - `category` (optional): Category label or slug (`Event`, `product-launch`, ...)
///
/// # Errors
///
/// Returns 400 Bad Request if the category is unknown.
pub async fn news_list_handler(
    State(state): State<AppState>,
    Query(params): Query<NewsParams>,
) -> Result<Json<NewsListResponse>, AppError> {
    let category = parse_category(params.category.as_deref())?;

    let items: Vec<NewsItemDto> = state
        .content_service
        .news(category)
        .into_iter()
        .map(NewsItemDto::from)
        .collect();

    Ok(Json(NewsListResponse {
        total: items.len(),
        items,
    }))
}

fn parse_category(raw: Option<&str>) -> Result<Option<NewsCategory>, AppError> {
    NewsCategory::parse_filter(raw).map_err(|e| {
        let allowed: Vec<&str> = NewsCategory::ALL.iter().map(|c| c.label()).collect();
        AppError::bad_request(
            e.to_string(),
            json!({ "category": e.0, "allowed": allowed }),
        )
    })
}
