//! Error handling module.
//!
//! This module provides unified error handling with proper HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::FieldError;

pub use codes::{ErrorCategory, ErrorCode};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// One or more query parameters failed validation.
    #[error("invalid query parameters")]
    Validation(Vec<FieldError>),

    /// Malformed request.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Question generation failed.
    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::INVALID_PARAM,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::NotFound(_) => ErrorCode::NOT_FOUND,
            Self::Generation(_) => ErrorCode::GENERATION_FAILED,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Generation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(error_code = code, status = %status, message = %message, "Request failed");
        } else {
            tracing::warn!(error_code = code, status = %status, message = %message, "Request rejected");
        }

        let body = match self {
            Self::Validation(errors) => json!({
                "code": code,
                "message": message,
                "errors": errors
            }),
            _ => json!({
                "code": code,
                "message": message,
                "data": null
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Generation-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No acceptable operand pair was found within the draw budget.
    #[error(
        "no valid operands after {attempts} draws \
         (minuend_digits={minuend_digits}, subtrahend_digits={subtrahend_digits}, borrowing={borrowing})"
    )]
    AttemptsExhausted {
        /// Draws made for the failing question.
        attempts: u32,
        /// Requested minuend width.
        minuend_digits: u8,
        /// Requested subtrahend width.
        subtrahend_digits: u8,
        /// Requested borrowing flag.
        borrowing: bool,
    },
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(Vec::new()).error_code(),
            ErrorCode::INVALID_PARAM
        );
        assert_eq!(
            AppError::NotFound("/nope".to_string()).error_code(),
            ErrorCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("test".to_string()).error_code(),
            ErrorCode::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation(Vec::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        let exhausted = GenerationError::AttemptsExhausted {
            attempts: 10,
            minuend_digits: 3,
            subtrahend_digits: 3,
            borrowing: true,
        };
        assert_eq!(
            AppError::from(exhausted).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_validation_body_lists_errors() {
        let error = AppError::Validation(vec![FieldError::new(
            "borrowing",
            Some("5".to_string()),
            "must be true or false",
        )]);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 3003);
        assert_eq!(body["errors"][0]["field"], "borrowing");
        assert_eq!(body["errors"][0]["value"], "5");
        assert_eq!(body["errors"][0]["message"], "must be true or false");
    }
}
