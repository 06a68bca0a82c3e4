//! Health check endpoints for container orchestration.
//!
//! `GET /health` is the liveness/readiness probe polled by Kubernetes, ECS,
//! systemd, and load balancers. `GET /health/report` lists each registered
//! component check for operators.

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppError;
use crate::health::{HealthReport, HealthStatus};
use crate::state::AppState;

/// Health check handler.
///
/// Answers 200 when the component is available and 503 otherwise, with the
/// `HealthStatus` JSON body in both cases.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    let status = state.middleware.health();
    let code = if status.is_available() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

/// Detailed health report.
pub async fn report(State(state): State<AppState>) -> Result<Json<HealthReport>, AppError> {
    let report = state.middleware.report();
    if report.status {
        return Ok(Json(report));
    }

    let failed: Vec<&str> = report
        .checks
        .iter()
        .filter(|c| !c.healthy)
        .map(|c| c.name.as_str())
        .collect();
    Err(AppError::Unavailable(failed.join(", ")))
}
