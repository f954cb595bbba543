//! Audit service
//!
//! Read-only access to the audit trail. Appending happens inside the ticket
//! and workflow services; there is no public write path.

use tracing::instrument;

use ticketflow_core::{AuditEntity, AuditLogEntry, DomainError, TicketId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    /// Create a new AuditService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The audit trail for one ticket, timestamp ascending
    #[instrument(skip(self))]
    pub async fn trail(&self, ticket_id: &TicketId) -> ServiceResult<Vec<AuditLogEntry>> {
        // A trail for a ticket that never existed is a caller error, not an
        // empty result
        if self
            .ctx
            .ticket_repo()
            .find_by_id(ticket_id)
            .await?
            .is_none()
        {
            return Err(DomainError::TicketNotFound(ticket_id.clone()).into());
        }

        Ok(self
            .ctx
            .audit_repo()
            .for_entity(AuditEntity::Ticket, ticket_id.as_str())
            .await?)
    }

    /// Every audit entry, timestamp ascending
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<AuditLogEntry>> {
        Ok(self.ctx.audit_repo().list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ticketflow_core::{ActorContext, Priority, Role};
    use ticketflow_store::{MemAuditLogStore, MemTicketStore, MemUserDirectory};

    use crate::dto::{CreateTicketRequest, ForwardTicketRequest};
    use crate::services::{ServiceContextBuilder, TicketService, WorkflowService};

    fn context() -> ServiceContext {
        ServiceContextBuilder::new()
            .ticket_repo(Arc::new(MemTicketStore::new()))
            .audit_repo(Arc::new(MemAuditLogStore::new()))
            .user_directory(Arc::new(MemUserDirectory::new()))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_trail_is_ordered_and_idempotent() {
        let ctx = context();
        let ops = ActorContext::new("100", "Omar Ops", Role::Operations);
        let lead = ActorContext::new("200", "Leah Lead", Role::Leadership);

        let ticket = TicketService::new(&ctx)
            .create(
                &ops,
                CreateTicketRequest {
                    title: "VPN outage".to_string(),
                    description: "Site-to-site VPN down since 09:00".to_string(),
                    priority: Priority::High,
                },
            )
            .await
            .unwrap()
            .ticket;

        WorkflowService::new(&ctx)
            .forward(
                &lead,
                &ticket.id,
                ForwardTicketRequest {
                    comment: "escalate".to_string(),
                },
            )
            .await
            .unwrap();

        let service = AuditService::new(&ctx);
        let trail = service.trail(&ticket.id).await.unwrap();
        assert_eq!(trail.len(), 2);
        assert!(trail.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

        // Re-querying without an intervening mutation returns identical data
        let again = service.trail(&ticket.id).await.unwrap();
        assert_eq!(trail, again);
    }

    #[tokio::test]
    async fn test_trail_for_unknown_ticket_is_not_found() {
        let ctx = context();
        let err = AuditService::new(&ctx)
            .trail(&TicketId::new("404"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
