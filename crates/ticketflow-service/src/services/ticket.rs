//! Ticket service
//!
//! Creation and read access. Only Operations raises tickets; every raised
//! ticket starts in SUBMITTED with a creation audit entry.

use tracing::{info, instrument};

use ticketflow_core::{
    ActorContext, AuditLogEntry, DomainError, Role, Ticket, TicketId, TicketQuery,
};

use crate::dto::{CreateTicketRequest, ListTicketsRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::workflow::{append_audit, TransitionReceipt};

/// Listing page size bounds
const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 100;

/// Ticket service
pub struct TicketService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TicketService<'a> {
    /// Create a new TicketService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Raise a new request (Operations only)
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &ActorContext,
        request: CreateTicketRequest,
    ) -> ServiceResult<TransitionReceipt> {
        if actor.role != Role::Operations {
            return Err(DomainError::RoleCapability {
                role: actor.role,
                action: "raise a ticket",
            }
            .into());
        }

        // The store assigns the real id on create
        let draft = Ticket::new(
            TicketId::new("0"),
            request.title,
            request.description,
            request.priority,
            actor.user_id.clone(),
        );

        let ticket = self.ctx.ticket_repo().create(&draft).await?;

        info!(
            ticket_id = %ticket.id,
            actor = %actor.user_name,
            priority = %ticket.priority,
            "Ticket raised"
        );

        let entry = AuditLogEntry::creation(&ticket.id, actor);
        let audit = append_audit(self.ctx, entry).await;

        Ok(TransitionReceipt { ticket, audit })
    }

    /// List tickets matching the given filters
    #[instrument(skip(self))]
    pub async fn list(&self, request: &ListTicketsRequest) -> ServiceResult<Vec<Ticket>> {
        let query = TicketQuery {
            status: request.status,
            priority: request.priority,
            search: request
                .q
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            page: request.page.unwrap_or(1).max(1),
            limit: request.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        };

        Ok(self.ctx.ticket_repo().list(&query).await?)
    }

    /// Get a single ticket
    #[instrument(skip(self))]
    pub async fn get(&self, ticket_id: &TicketId) -> ServiceResult<Ticket> {
        self.ctx
            .ticket_repo()
            .find_by_id(ticket_id)
            .await?
            .ok_or_else(|| DomainError::TicketNotFound(ticket_id.clone()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ticketflow_core::{AuditAction, AuditEntity, AuditLogRepository, Priority, TicketStatus};
    use ticketflow_store::{MemAuditLogStore, MemTicketStore, MemUserDirectory};

    use crate::services::ServiceContextBuilder;

    fn context() -> (ServiceContext, MemAuditLogStore) {
        let audit = MemAuditLogStore::new();
        let ctx = ServiceContextBuilder::new()
            .ticket_repo(Arc::new(MemTicketStore::new()))
            .audit_repo(Arc::new(audit.clone()))
            .user_directory(Arc::new(MemUserDirectory::new()))
            .build()
            .unwrap();
        (ctx, audit)
    }

    fn request(title: &str, priority: Priority) -> CreateTicketRequest {
        CreateTicketRequest {
            title: title.to_string(),
            description: format!("{title} - description long enough"),
            priority,
        }
    }

    #[tokio::test]
    async fn test_create_starts_submitted_with_creation_entry() {
        let (ctx, audit) = context();
        let actor = ActorContext::new("100", "Omar Ops", Role::Operations);

        let receipt = TicketService::new(&ctx)
            .create(&actor, request("VPN outage", Priority::High))
            .await
            .unwrap();

        assert_eq!(receipt.ticket.status, TicketStatus::Submitted);
        assert_eq!(receipt.ticket.raised_by, "100");
        assert_eq!(receipt.ticket.version, 1);
        assert!(receipt.audit.is_recorded());

        let trail = audit
            .for_entity(AuditEntity::Ticket, receipt.ticket.id.as_str())
            .await
            .unwrap();
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].action, AuditAction::TicketCreated);
        assert!(trail[0].previous_state.is_none());
    }

    #[tokio::test]
    async fn test_only_operations_may_raise() {
        let (ctx, audit) = context();
        let actor = ActorContext::new("200", "Leah Lead", Role::Leadership);

        let err = TicketService::new(&ctx)
            .create(&actor, request("VPN outage", Priority::High))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 403);
        assert!(audit.is_empty());
    }

    #[tokio::test]
    async fn test_list_clamps_limit() {
        let (ctx, _) = context();
        let actor = ActorContext::new("100", "Omar Ops", Role::Operations);
        let service = TicketService::new(&ctx);
        for i in 0..3 {
            service
                .create(&actor, request(&format!("ticket {i}"), Priority::Low))
                .await
                .unwrap();
        }

        let listed = service
            .list(&ListTicketsRequest {
                limit: Some(100_000),
                ..ListTicketsRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.len(), 3);

        let first_page = service
            .list(&ListTicketsRequest {
                limit: Some(2),
                ..ListTicketsRequest::default()
            })
            .await
            .unwrap();
        assert_eq!(first_page.len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let (ctx, _) = context();
        let err = TicketService::new(&ctx)
            .get(&TicketId::new("404"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
