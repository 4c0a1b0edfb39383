//! # Error Handling Middleware
//!
//! Maps the domain error taxonomy to HTTP status codes and JSON error
//! responses, giving the whole API one failure shape. Store error detail is
//! logged here and never echoed back verbatim; callers only see the
//! pre-classified message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use dronedock_core::errors::RentalError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `RentalError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub RentalError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            RentalError::NotFound(_) => StatusCode::NOT_FOUND,
            RentalError::Validation(_) => StatusCode::BAD_REQUEST,
            RentalError::Authentication(_) => StatusCode::UNAUTHORIZED,
            RentalError::Authorization(_) => StatusCode::FORBIDDEN,
            RentalError::Conflict(_) => StatusCode::CONFLICT,
            RentalError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RentalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Infrastructure failures keep their detail in the logs, not the body
        let message = match &self.0 {
            RentalError::Database(report) => {
                tracing::error!("Database error: {:?}", report);
                "Internal server error".to_string()
            }
            RentalError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

/// Allows using `?` with `Result<T, RentalError>` inside handlers that
/// return `Result<T, AppError>`.
impl From<RentalError> for AppError {
    fn from(err: RentalError) -> Self {
        AppError(err)
    }
}

/// Allows using `?` with `Result<T, eyre::Report>`; the report is treated
/// as an infrastructure failure.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(RentalError::Database(err))
    }
}

/// Maps a RentalError directly to an HTTP response.
pub fn map_error(err: RentalError) -> Response {
    AppError(err).into_response()
}
