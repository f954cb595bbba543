//! Ticket wire model and PATCH body

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ticketflow_core::{AuditorDecision, Priority, Ticket, TicketId, TicketPatch, TicketStatus};

use super::de;

/// Ticket record as the entity store serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketModel {
    /// Absent on POST bodies; assigned by the store
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::flexible_id_opt"
    )]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub leadership_comment: Option<String>,
    #[serde(default, deserialize_with = "de::empty_string_as_none")]
    pub management_action: Option<String>,
    #[serde(default, deserialize_with = "de::empty_as_none")]
    pub auditor_decision: Option<AuditorDecision>,
    #[serde(deserialize_with = "de::flexible_id")]
    pub raised_by: String,
    pub created_at: DateTime<Utc>,
    /// Records created before this service carried no updatedAt
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Records created before this service carried no version token
    #[serde(default = "de::default_version")]
    pub version: i64,
}

impl From<&Ticket> for TicketModel {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: Some(ticket.id.to_string()),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            priority: ticket.priority,
            status: ticket.status,
            leadership_comment: ticket.leadership_comment.clone(),
            management_action: ticket.management_action.clone(),
            auditor_decision: ticket.auditor_decision,
            raised_by: ticket.raised_by.clone(),
            created_at: ticket.created_at,
            updated_at: Some(ticket.updated_at),
            version: ticket.version,
        }
    }
}

impl TicketModel {
    /// POST body for a new ticket: same record without an id
    pub fn for_create(ticket: &Ticket) -> Self {
        Self {
            id: None,
            ..Self::from(ticket)
        }
    }

    /// Convert into a domain ticket.
    ///
    /// `fallback_id` covers stores that echo creation responses without the
    /// assigned id field populated yet.
    pub fn into_ticket(self, fallback_id: Option<&TicketId>) -> Option<Ticket> {
        let id = match (self.id, fallback_id) {
            (Some(id), _) => TicketId::new(id),
            (None, Some(id)) => id.clone(),
            (None, None) => return None,
        };
        let updated_at = self.updated_at.unwrap_or(self.created_at);
        Some(Ticket {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
            leadership_comment: self.leadership_comment,
            management_action: self.management_action,
            auditor_decision: self.auditor_decision,
            raised_by: self.raised_by,
            created_at: self.created_at,
            updated_at,
            version: self.version,
        })
    }
}

/// PATCH body for a conditional ticket update.
///
/// Only the fields the transition touches are serialized; the bumped version
/// token always travels with the patch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatchModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leadership_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auditor_decision: Option<AuditorDecision>,
    pub updated_at: DateTime<Utc>,
    pub version: i64,
}

impl TicketPatchModel {
    pub fn new(patch: &TicketPatch, new_version: i64) -> Self {
        Self {
            status: patch.status,
            leadership_comment: patch.leadership_comment.clone(),
            management_action: patch.management_action.clone(),
            auditor_decision: patch.auditor_decision,
            updated_at: Utc::now(),
            version: new_version,
        }
    }
}
