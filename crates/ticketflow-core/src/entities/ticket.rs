//! Ticket entity - the unit of work tracked through the workflow

use chrono::{DateTime, Utc};

use crate::value_objects::{AuditorDecision, Priority, TicketId, TicketStatus};

/// A request raised by Operations, moving through the review stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    /// Set once when Leadership forwards the ticket
    pub leadership_comment: Option<String>,
    /// Set by Management; replaced when a REVERIFY loop records a revised action
    pub management_action: Option<String>,
    /// Last auditor decision, if any
    pub auditor_decision: Option<AuditorDecision>,
    /// Id of the originating user
    pub raised_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Version token for conditional updates; bumped on every mutation
    pub version: i64,
}

impl Ticket {
    /// Create a new ticket in the initial SUBMITTED state
    pub fn new(
        id: TicketId,
        title: String,
        description: String,
        priority: Priority,
        raised_by: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            priority,
            status: TicketStatus::Submitted,
            leadership_comment: None,
            management_action: None,
            auditor_decision: None,
            raised_by,
            created_at: now,
            updated_at: now,
            version: 1,
        }
    }

    /// Whether the ticket has reached a terminal state
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply a patch in place, bumping the version token.
    ///
    /// Callers are responsible for checking the version precondition first;
    /// this only performs the field updates.
    pub fn apply(&mut self, patch: &TicketPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(comment) = &patch.leadership_comment {
            self.leadership_comment = Some(comment.clone());
        }
        if let Some(action) = &patch.management_action {
            self.management_action = Some(action.clone());
        }
        if let Some(decision) = patch.auditor_decision {
            self.auditor_decision = Some(decision);
        }
        self.version += 1;
        self.updated_at = Utc::now();
    }
}

/// Partial update of ticket fields, produced by the workflow planner.
///
/// Only the fields a transition touches are set; everything else is left
/// untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketPatch {
    pub status: Option<TicketStatus>,
    pub leadership_comment: Option<String>,
    pub management_action: Option<String>,
    pub auditor_decision: Option<AuditorDecision>,
}

impl TicketPatch {
    /// A patch that only moves the status
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// True if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.leadership_comment.is_none()
            && self.management_action.is_none()
            && self.auditor_decision.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket() -> Ticket {
        Ticket::new(
            TicketId::new("1"),
            "VPN outage".to_string(),
            "Site-to-site VPN down since 09:00".to_string(),
            Priority::High,
            "u-100".to_string(),
        )
    }

    #[test]
    fn test_new_ticket_is_submitted() {
        let t = ticket();
        assert_eq!(t.status, TicketStatus::Submitted);
        assert_eq!(t.version, 1);
        assert!(t.leadership_comment.is_none());
        assert!(t.management_action.is_none());
        assert!(t.auditor_decision.is_none());
        assert!(!t.is_closed());
    }

    #[test]
    fn test_apply_bumps_version() {
        let mut t = ticket();
        let patch = TicketPatch {
            status: Some(TicketStatus::ForwardedToManagement),
            leadership_comment: Some("escalate".to_string()),
            ..TicketPatch::default()
        };
        t.apply(&patch);
        assert_eq!(t.status, TicketStatus::ForwardedToManagement);
        assert_eq!(t.leadership_comment.as_deref(), Some("escalate"));
        assert_eq!(t.version, 2);
    }

    #[test]
    fn test_apply_leaves_untouched_fields() {
        let mut t = ticket();
        t.leadership_comment = Some("escalate".to_string());
        t.apply(&TicketPatch::status(TicketStatus::ActionTaken));
        assert_eq!(t.leadership_comment.as_deref(), Some("escalate"));
    }

    #[test]
    fn test_empty_patch() {
        assert!(TicketPatch::default().is_empty());
        assert!(!TicketPatch::status(TicketStatus::Closed).is_empty());
    }
}
