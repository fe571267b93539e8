//! Health check handlers.

use axum::{Json, extract::State};

use crate::api::state::AppState;
use crate::domain::{ApiResponse, HealthResponse};
use crate::error::{AppError, Result};

/// Plain-text liveness probe.
pub async fn ping() -> &'static str {
    "pong"
}

/// Liveness probe with service version.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Prometheus metrics endpoint.
pub async fn metrics(State(state): State<AppState>) -> Result<String> {
    state
        .metrics
        .as_ref()
        .map(metrics_exporter_prometheus::PrometheusHandle::render)
        .ok_or_else(|| AppError::NotFound("metrics are disabled".to_string()))
}
