use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use service_core::error::AppError;
use service_core::observability::get_metrics;

use crate::dtos::{ErrorResponse, HealthResponse, ServiceInfo};
use crate::startup::AppState;

/// Service descriptor
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service metadata", body = ServiceInfo)),
    tag = "Observability"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::current())
}

/// Liveness check; never touches the provider
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Observability"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check against the provider
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Provider reachable"),
        (status = 503, description = "Provider unavailable", body = ErrorResponse)
    ),
    tag = "Observability"
)]
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.generator.provider().health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Provider health check failed");
        AppError::ServiceUnavailable
    })?;
    Ok(StatusCode::OK)
}

pub async fn metrics() -> impl IntoResponse {
    get_metrics()
}
