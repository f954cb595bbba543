//! Ticket handlers
//!
//! Creation and read endpoints.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use ticketflow_core::TicketId;
use ticketflow_service::{
    CreateTicketRequest, ListTicketsRequest, TicketResponse, TicketService,
    TransitionReceiptResponse,
};

use crate::extractors::{ActorIdentity, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Raise a new ticket (Operations)
///
/// POST /tickets
pub async fn create_ticket(
    State(state): State<AppState>,
    ActorIdentity(actor): ActorIdentity,
    ValidatedJson(request): ValidatedJson<CreateTicketRequest>,
) -> ApiResult<Created<Json<TransitionReceiptResponse>>> {
    let service = TicketService::new(state.service_context());
    let receipt = service.create(&actor, request).await?;
    Ok(Created(Json(receipt.into())))
}

/// List tickets with optional filters
///
/// GET /tickets?status=&priority=&q=&page=&limit=
pub async fn list_tickets(
    State(state): State<AppState>,
    ActorIdentity(_actor): ActorIdentity,
    Query(request): Query<ListTicketsRequest>,
) -> ApiResult<Json<Vec<TicketResponse>>> {
    let service = TicketService::new(state.service_context());
    let tickets = service.list(&request).await?;
    Ok(Json(tickets.into_iter().map(TicketResponse::from).collect()))
}

/// Get a single ticket
///
/// GET /tickets/{ticket_id}
pub async fn get_ticket(
    State(state): State<AppState>,
    ActorIdentity(_actor): ActorIdentity,
    Path(ticket_id): Path<String>,
) -> ApiResult<Json<TicketResponse>> {
    let service = TicketService::new(state.service_context());
    let ticket = service.get(&TicketId::new(ticket_id)).await?;
    Ok(Json(ticket.into()))
}
