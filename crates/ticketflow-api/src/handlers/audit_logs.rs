//! Audit trail handlers
//!
//! Read-only; the trail is written as a side effect of ticket mutations.

use axum::{
    extract::{Path, State},
    Json,
};
use ticketflow_core::TicketId;
use ticketflow_service::{AuditLogEntryResponse, AuditService};

use crate::extractors::ActorIdentity;
use crate::response::ApiResult;
use crate::state::AppState;

/// Audit trail for one ticket, timestamp ascending
///
/// GET /tickets/{ticket_id}/audit
pub async fn get_ticket_audit(
    State(state): State<AppState>,
    ActorIdentity(_actor): ActorIdentity,
    Path(ticket_id): Path<String>,
) -> ApiResult<Json<Vec<AuditLogEntryResponse>>> {
    let service = AuditService::new(state.service_context());
    let trail = service.trail(&TicketId::new(ticket_id)).await?;
    Ok(Json(trail.into_iter().map(AuditLogEntryResponse::from).collect()))
}

/// Every audit entry, timestamp ascending
///
/// GET /audit-logs
pub async fn list_audit_logs(
    State(state): State<AppState>,
    ActorIdentity(_actor): ActorIdentity,
) -> ApiResult<Json<Vec<AuditLogEntryResponse>>> {
    let service = AuditService::new(state.service_context());
    let entries = service.list_all().await?;
    Ok(Json(entries.into_iter().map(AuditLogEntryResponse::from).collect()))
}
