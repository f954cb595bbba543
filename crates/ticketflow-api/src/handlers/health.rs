//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use ticketflow_core::TicketQuery;
use ticketflow_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    // A one-item listing doubles as the store reachability probe
    let store_healthy = state
        .service_context()
        .ticket_repo()
        .list(&TicketQuery {
            limit: 1,
            ..TicketQuery::default()
        })
        .await
        .is_ok();

    let response = ReadinessResponse::ready(store_healthy);
    let status = if store_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
