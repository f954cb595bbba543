//! Workflow service
//!
//! Orchestrates role-gated status transitions: fetch the ticket, plan the
//! transition (all checks precede any mutation), conditionally update the
//! store keyed on the fetched version, then append the audit entry.

use tracing::{info, instrument, warn};

use ticketflow_core::workflow::{plan, WorkflowAction};
use ticketflow_core::{ActorContext, AuditAction, AuditLogEntry, DomainError, Ticket, TicketId};

use crate::dto::{DecideRequest, ForwardTicketRequest, RecordActionRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// What happened to the audit trail after a successful ticket mutation.
#[derive(Debug, Clone)]
pub enum AuditOutcome {
    /// The entry was appended and is part of the trail
    Recorded(AuditLogEntry),
    /// The mutation went through but the append failed; the trail is
    /// incomplete for this ticket
    Degraded { action: AuditAction, error: String },
}

impl AuditOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }
}

/// Result of a successful mutation: the stored ticket plus the audit outcome.
#[derive(Debug, Clone)]
pub struct TransitionReceipt {
    pub ticket: Ticket,
    pub audit: AuditOutcome,
}

/// Workflow service
pub struct WorkflowService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WorkflowService<'a> {
    /// Create a new WorkflowService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Leadership reviews a SUBMITTED ticket and forwards it to Management
    #[instrument(skip(self, request))]
    pub async fn forward(
        &self,
        actor: &ActorContext,
        ticket_id: &TicketId,
        request: ForwardTicketRequest,
    ) -> ServiceResult<TransitionReceipt> {
        self.apply(
            actor,
            ticket_id,
            WorkflowAction::Forward {
                comment: request.comment,
            },
        )
        .await
    }

    /// Management records the action taken (from FORWARDED_TO_MANAGEMENT or
    /// the REVERIFY loop)
    #[instrument(skip(self, request))]
    pub async fn record_action(
        &self,
        actor: &ActorContext,
        ticket_id: &TicketId,
        request: RecordActionRequest,
    ) -> ServiceResult<TransitionReceipt> {
        self.apply(
            actor,
            ticket_id,
            WorkflowAction::RecordAction {
                action: request.action,
            },
        )
        .await
    }

    /// Auditor decides on a ticket in ACTION_TAKEN
    #[instrument(skip(self, request))]
    pub async fn decide(
        &self,
        actor: &ActorContext,
        ticket_id: &TicketId,
        request: DecideRequest,
    ) -> ServiceResult<TransitionReceipt> {
        self.apply(
            actor,
            ticket_id,
            WorkflowAction::Decide {
                decision: request.decision,
            },
        )
        .await
    }

    async fn apply(
        &self,
        actor: &ActorContext,
        ticket_id: &TicketId,
        action: WorkflowAction,
    ) -> ServiceResult<TransitionReceipt> {
        let ticket = self
            .ctx
            .ticket_repo()
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| DomainError::TicketNotFound(ticket_id.clone()))?;

        // All rejection paths happen here, before any store write
        let plan = plan(&ticket, actor, &action)?;

        let updated = self
            .ctx
            .ticket_repo()
            .update(ticket_id, &plan.patch, ticket.version)
            .await?;

        info!(
            ticket_id = %ticket_id,
            actor = %actor.user_name,
            role = %actor.role,
            from = %plan.from,
            to = %plan.to,
            "Ticket transitioned"
        );

        let entry =
            AuditLogEntry::transition(ticket_id, actor, plan.audit_action, plan.from, plan.to);
        let audit = append_audit(self.ctx, entry).await;

        Ok(TransitionReceipt {
            ticket: updated,
            audit,
        })
    }
}

/// Append one audit entry, degrading instead of failing the whole operation.
///
/// The primary mutation has already been applied at this point; surfacing a
/// hard error here would misreport a completed operation as failed.
pub(super) async fn append_audit(ctx: &ServiceContext, entry: AuditLogEntry) -> AuditOutcome {
    let action = entry.action;
    match ctx.audit_repo().append(&entry).await {
        Ok(stored) => AuditOutcome::Recorded(stored),
        Err(err) => {
            warn!(
                entity_id = %entry.entity_id,
                action = %action,
                error = %err,
                "Audit append failed after successful ticket mutation"
            );
            AuditOutcome::Degraded {
                action,
                error: err.to_string(),
            }
        }
    }
}
