//! Response DTOs for API endpoints
//!
//! Responses serialize camelCase to match the wire language the ticket data
//! already speaks.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ticketflow_core::dashboard::WidgetData;
use ticketflow_core::{
    AuditAction, AuditLogEntry, AuditorDecision, Priority, Role, Ticket, TicketStatus,
};

use crate::services::{AuditOutcome, TransitionReceipt};

// ============================================================================
// Ticket Responses
// ============================================================================

/// Full ticket view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditor_decision: Option<AuditorDecision>,
    pub raised_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id.into_inner(),
            title: ticket.title,
            description: ticket.description,
            priority: ticket.priority,
            status: ticket.status,
            leadership_comment: ticket.leadership_comment,
            management_action: ticket.management_action,
            auditor_decision: ticket.auditor_decision,
            raised_by: ticket.raised_by,
            created_at: ticket.created_at,
            updated_at: ticket.updated_at,
            version: ticket.version,
        }
    }
}

// ============================================================================
// Audit Responses
// ============================================================================

/// One audit trail entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntryResponse {
    pub id: Option<String>,
    pub entity: &'static str,
    pub entity_id: String,
    pub user_name: String,
    pub role: Role,
    pub action: AuditAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_state: Option<TicketStatus>,
    pub new_state: TicketStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            id: entry.id,
            entity: entry.entity.as_str(),
            entity_id: entry.entity_id,
            user_name: entry.user_name,
            role: entry.role,
            action: entry.action,
            previous_state: entry.previous_state,
            new_state: entry.new_state,
            timestamp: entry.timestamp,
        }
    }
}

// ============================================================================
// Workflow Responses
// ============================================================================

/// Outcome of a mutation: the updated ticket plus what happened to the audit
/// trail. `audit_recorded` is false when the mutation succeeded but the
/// trail append failed; the operation completed in a degraded state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionReceiptResponse {
    pub ticket: TicketResponse,
    pub audit_recorded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_entry: Option<AuditLogEntryResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<TransitionReceipt> for TransitionReceiptResponse {
    fn from(receipt: TransitionReceipt) -> Self {
        match receipt.audit {
            AuditOutcome::Recorded(entry) => Self {
                ticket: receipt.ticket.into(),
                audit_recorded: true,
                audit_entry: Some(entry.into()),
                warning: None,
            },
            AuditOutcome::Degraded { action, error } => Self {
                ticket: receipt.ticket.into(),
                audit_recorded: false,
                audit_entry: None,
                warning: Some(format!(
                    "ticket updated but audit entry {action} was not recorded: {error}"
                )),
            },
        }
    }
}

// ============================================================================
// Dashboard Responses
// ============================================================================

/// A rendered role dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub role: Role,
    pub widgets: Vec<WidgetData>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            service: "ticketflow",
        }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub store: bool,
}

impl ReadinessResponse {
    pub fn ready(store: bool) -> Self {
        Self {
            status: if store { "ready" } else { "degraded" },
            store,
        }
    }
}
