//! Audit log entry - immutable record of a workflow transition

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ActorContext, AuditAction, Role, TicketId, TicketStatus};

/// Kind of entity an audit entry refers to.
///
/// Only tickets are audited today; the discriminator exists because the log
/// is shared with the store's other consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditEntity {
    #[serde(rename = "TICKET")]
    Ticket,
}

impl AuditEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticket => "TICKET",
        }
    }
}

/// One append-only audit record.
///
/// Entries are never mutated once written; per entity they are ordered by
/// timestamp. Transition entries carry both the previous and the new state;
/// creation entries have no previous state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLogEntry {
    /// Store-assigned id; None until persisted
    pub id: Option<String>,
    pub entity: AuditEntity,
    pub entity_id: String,
    pub user_name: String,
    pub role: Role,
    pub action: AuditAction,
    pub previous_state: Option<TicketStatus>,
    pub new_state: TicketStatus,
    pub timestamp: DateTime<Utc>,
}

impl AuditLogEntry {
    /// Entry for a ticket status transition
    pub fn transition(
        ticket_id: &TicketId,
        actor: &ActorContext,
        action: AuditAction,
        previous_state: TicketStatus,
        new_state: TicketStatus,
    ) -> Self {
        Self {
            id: None,
            entity: AuditEntity::Ticket,
            entity_id: ticket_id.to_string(),
            user_name: actor.user_name.clone(),
            role: actor.role,
            action,
            previous_state: Some(previous_state),
            new_state,
            timestamp: Utc::now(),
        }
    }

    /// Entry for ticket creation (no previous state)
    pub fn creation(ticket_id: &TicketId, actor: &ActorContext) -> Self {
        Self {
            id: None,
            entity: AuditEntity::Ticket,
            entity_id: ticket_id.to_string(),
            user_name: actor.user_name.clone(),
            role: actor.role,
            action: AuditAction::TicketCreated,
            previous_state: None,
            new_state: TicketStatus::Submitted,
            timestamp: Utc::now(),
        }
    }

    /// Check the required fields before the entry is persisted.
    ///
    /// Every appender implementation calls this so the invariant holds
    /// regardless of backend.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entity_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "audit entry entityId must not be empty".to_string(),
            ));
        }
        if self.user_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "audit entry userName must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
