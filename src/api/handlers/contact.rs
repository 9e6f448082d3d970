//! Handler for JSON contact submissions.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::contact::ContactResponse;
use crate::domain::contact::ContactSubmission;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a contact inquiry.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Asha Rao",
///   "email": "asha@example.com",
///   "phone": "+91 98765 43210",
///   "subject": "Quote request",
///   "message": "Please share pricing for the PTS-10."
/// }
/// ```
///
/// `phone` is optional.
///
/// # Response
///
/// **202 Accepted** with a reference for the inquiry.
///
/// # Errors
///
/// - **400 Bad Request**: a field failed validation; `details.fields` maps
///   field names to messages
/// - **429 Too Many Requests**: rate limit exceeded
/// - **500 Internal Server Error**: delivery failed
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactResponse>), AppError> {
    let receipt = state.contact_service.submit(payload).await?;
    Ok((StatusCode::ACCEPTED, Json(receipt.into())))
}
