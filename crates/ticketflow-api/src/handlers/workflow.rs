//! Workflow transition handlers
//!
//! One POST subresource per role-gated transition. The acting user arrives in
//! the identity headers; capability and state checks happen in the service
//! layer before anything is written.

use axum::{
    extract::{Path, State},
    Json,
};
use ticketflow_core::TicketId;
use ticketflow_service::{
    DecideRequest, ForwardTicketRequest, RecordActionRequest, TransitionReceiptResponse,
    WorkflowService,
};

use crate::extractors::{ActorIdentity, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Leadership: comment and forward to Management
///
/// POST /tickets/{ticket_id}/forward
pub async fn forward_ticket(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(ticket_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ForwardTicketRequest>,
) -> ApiResult<Json<TransitionReceiptResponse>> {
    let service = WorkflowService::new(state.service_context());
    let receipt = service
        .forward(&actor, &TicketId::new(ticket_id), request)
        .await?;
    Ok(Json(receipt.into()))
}

/// Management: record the action taken
///
/// POST /tickets/{ticket_id}/action
pub async fn record_action(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(ticket_id): Path<String>,
    ValidatedJson(request): ValidatedJson<RecordActionRequest>,
) -> ApiResult<Json<TransitionReceiptResponse>> {
    let service = WorkflowService::new(state.service_context());
    let receipt = service
        .record_action(&actor, &TicketId::new(ticket_id), request)
        .await?;
    Ok(Json(receipt.into()))
}

/// Auditor: finalize a decision
///
/// POST /tickets/{ticket_id}/decision
pub async fn decide_ticket(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    Path(ticket_id): Path<String>,
    ValidatedJson(request): ValidatedJson<DecideRequest>,
) -> ApiResult<Json<TransitionReceiptResponse>> {
    let service = WorkflowService::new(state.service_context());
    let receipt = service
        .decide(&actor, &TicketId::new(ticket_id), request)
        .await?;
    Ok(Json(receipt.into()))
}
