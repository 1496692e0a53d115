//! Error handling for the HTTP boundary
//!
//! Maps the domain error taxonomy to HTTP status codes and JSON envelopes
//! exactly once, here. Store and internal faults are logged with their
//! detail but clients only ever see a generic message, so no schema or
//! driver internals leak into responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use todo_core::{TodoError, ValidationErrors};

/// HTTP-facing wrapper around the domain error.
///
/// Exists so `?` works in handlers while keeping the status/envelope
/// mapping in one place.
#[derive(Debug)]
pub struct ApiError(pub TodoError);

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        ApiError(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError(TodoError::Validation(errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &self.0 {
            TodoError::NotFound(message) => json!({ "error": message }),
            TodoError::EmptyPayload => json!({ "error": "No input data provided" }),
            TodoError::Validation(errors) => {
                json!({ "error": "Validation error", "messages": errors })
            }
            TodoError::Database(detail)
            | TodoError::Configuration(detail)
            | TodoError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                json!({ "error": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}
