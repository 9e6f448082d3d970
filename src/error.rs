//! Application error type and its JSON representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fmt;
use validator::ValidationErrors;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload returned by JSON endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced to HTTP clients.
///
/// Each variant maps to a status code and a stable machine-readable `code`:
///
/// | Variant      | Status | Code               |
/// |--------------|--------|--------------------|
/// | `Validation` | 400    | `validation_error` |
/// | `NotFound`   | 404    | `not_found`        |
/// | `Internal`   | 500    | `internal_error`   |
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::bad_request(
            "Validation failed",
            json!({ "fields": validation_messages(&errors) }),
        )
    }
}

/// First message for each invalid field, keyed by field name.
pub fn validation_messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((field.to_string(), message))
        })
        .collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(code, message = %self.message(), "Request failed");
        }

        let (message, details) = match self {
            AppError::Validation { message, details }
            | AppError::NotFound { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactSubmission;
    use validator::Validate;

    #[test]
    fn test_status_and_code_mapping() {
        let err = AppError::not_found("Category not found", json!({"slug": "x"}));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "not_found");
        assert_eq!(err.details()["slug"], "x");

        let err = AppError::bad_request("Invalid", json!({}));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = AppError::internal("Boom", json!({}));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        let err = AppError::bad_request("Name is required", json!({}));
        assert_eq!(err.to_string(), "validation_error: Name is required");
    }

    #[test]
    fn test_validation_errors_conversion() {
        let submission = ContactSubmission {
            name: String::new(),
            email: "not-an-email".to_string(),
            phone: None,
            subject: "Quote".to_string(),
            message: "Hello".to_string(),
        };
        let err: AppError = submission.validate().unwrap_err().into();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.details()["fields"]["name"], "Name is required");
        assert_eq!(
            err.details()["fields"]["email"],
            "A valid email address is required"
        );
        assert!(err.details()["fields"].get("subject").is_none());
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("missing", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
