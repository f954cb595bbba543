//! Dashboard handlers

use axum::{
    extract::{Path, State},
    Json,
};
use ticketflow_core::Role;
use ticketflow_service::{DashboardResponse, DashboardService};

use crate::extractors::ActorIdentity;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Rendered dashboard for a role
///
/// GET /dashboards/{role}
pub async fn get_dashboard(
    State(state): State<AppState>,
    ActorIdentity(_actor): ActorIdentity,
    Path(role): Path<String>,
) -> ApiResult<Json<DashboardResponse>> {
    let role: Role = role
        .to_uppercase()
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown dashboard role"))?;

    let service = DashboardService::new(state.service_context());
    let dashboard = service.render_for_role(role).await?;
    Ok(Json(dashboard))
}
