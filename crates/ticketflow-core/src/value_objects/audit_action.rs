//! Audit action labels
//!
//! Every audit entry names the action that produced it. The set is closed:
//! one label per workflow operation, plus the creation marker.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Action recorded in an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    TicketCreated,
    LeadershipForward,
    ManagementAction,
    AuditorAccepted,
    AuditorRejected,
    AuditorReverify,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TicketCreated => "TICKET_CREATED",
            Self::LeadershipForward => "LEADERSHIP_FORWARD",
            Self::ManagementAction => "MANAGEMENT_ACTION",
            Self::AuditorAccepted => "AUDITOR_ACCEPTED",
            Self::AuditorRejected => "AUDITOR_REJECTED",
            Self::AuditorReverify => "AUDITOR_REVERIFY",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
