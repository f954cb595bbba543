//! Workflow status, priority, and decision enums
//!
//! Wire spellings match the entity store's records (SCREAMING_SNAKE_CASE).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Ticket workflow status.
///
/// Statuses advance along the fixed stage order
/// SUBMITTED → FORWARDED_TO_MANAGEMENT → ACTION_TAKEN → {CLOSED, REVERIFY};
/// REVERIFY loops back to Management for a revised action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Submitted,
    ForwardedToManagement,
    ActionTaken,
    Reverify,
    Closed,
}

impl TicketStatus {
    /// Wire spelling of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::ForwardedToManagement => "FORWARDED_TO_MANAGEMENT",
            Self::ActionTaken => "ACTION_TAKEN",
            Self::Reverify => "REVERIFY",
            Self::Closed => "CLOSED",
        }
    }

    /// Closed tickets accept no further transitions
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// A ticket still moving through the forward stages (not closed, not
    /// parked in the reverify loop)
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Submitted | Self::ForwardedToManagement | Self::ActionTaken
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(Self::Submitted),
            "FORWARDED_TO_MANAGEMENT" => Ok(Self::ForwardedToManagement),
            "ACTION_TAKEN" => Ok(Self::ActionTaken),
            "REVERIFY" => Ok(Self::Reverify),
            "CLOSED" => Ok(Self::Closed),
            other => Err(DomainError::Validation(format!(
                "unknown ticket status: {other}"
            ))),
        }
    }
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            other => Err(DomainError::Validation(format!(
                "unknown priority: {other}"
            ))),
        }
    }
}

/// Auditor decision on a ticket in ACTION_TAKEN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditorDecision {
    Accepted,
    Rejected,
    Reverify,
}

impl AuditorDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Rejected => "REJECTED",
            Self::Reverify => "REVERIFY",
        }
    }

    /// ACCEPTED and REJECTED both close the ticket; REVERIFY loops back
    #[inline]
    pub fn closes_ticket(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl fmt::Display for AuditorDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditorDecision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPTED" => Ok(Self::Accepted),
            "REJECTED" => Ok(Self::Rejected),
            "REVERIFY" => Ok(Self::Reverify),
            other => Err(DomainError::Validation(format!(
                "unknown auditor decision: {other}"
            ))),
        }
    }
}

/// Account status in the user roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::ForwardedToManagement).unwrap(),
            "\"FORWARDED_TO_MANAGEMENT\""
        );
        assert_eq!(
            "ACTION_TAKEN".parse::<TicketStatus>().unwrap(),
            TicketStatus::ActionTaken
        );
    }

    #[test]
    fn test_status_classifiers() {
        assert!(TicketStatus::Closed.is_terminal());
        assert!(!TicketStatus::Reverify.is_terminal());
        assert!(TicketStatus::Submitted.is_active());
        assert!(!TicketStatus::Reverify.is_active());
        assert!(!TicketStatus::Closed.is_active());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "APPROVED".parse::<TicketStatus>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_decision_closes_ticket() {
        assert!(AuditorDecision::Accepted.closes_ticket());
        assert!(AuditorDecision::Rejected.closes_ticket());
        assert!(!AuditorDecision::Reverify.closes_ticket());
    }
}
