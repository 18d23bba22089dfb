use super::models::{HealthResponse, ValidationRequest, ValidationResult};
use crate::common::{ApiError, AppState};
use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    Json,
};
use std::sync::Arc;
use tracing::info;

/// GET /validate - Check whether a domain plausibly belongs to the named college
///
/// Format and DNS failures are reported inside the result body with a 200
/// status; only a malformed query string produces an error response.
pub async fn validate_domain(
    Extension(state): Extension<Arc<AppState>>,
    query: Result<Query<ValidationRequest>, QueryRejection>,
) -> Result<Json<ValidationResult>, ApiError> {
    let Query(request) = query?;

    info!(
        college_name = %request.college_name,
        domain = %request.domain,
        "Validating domain"
    );

    let result = state
        .validation_service
        .validate(&request.college_name, &request.domain)
        .await;

    Ok(Json(result))
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
