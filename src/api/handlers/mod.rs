//! HTTP handlers.

pub mod health;
pub mod questions;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
