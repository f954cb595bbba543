//! Request DTOs for API endpoints
//!
//! All mutating request DTOs implement `Deserialize` and `Validate`.
//! Length bounds follow the original intake forms: titles of at least 3
//! characters, descriptions of at least 10, comments and actions of at
//! least 5.

use serde::Deserialize;
use validator::Validate;

use ticketflow_core::{AuditorDecision, Priority, TicketStatus};

// ============================================================================
// Ticket Requests
// ============================================================================

/// Raise a new request (Operations)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(length(min = 3, max = 120, message = "Title must be 3-120 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 2000, message = "Description must be 10-2000 characters"))]
    pub description: String,

    pub priority: Priority,
}

/// Ticket listing filters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTicketsRequest {
    #[serde(default)]
    pub status: Option<TicketStatus>,

    #[serde(default)]
    pub priority: Option<Priority>,

    /// Free-text search over title and description
    #[serde(default)]
    pub q: Option<String>,

    /// 1-based page number
    #[serde(default)]
    pub page: Option<i64>,

    #[serde(default)]
    pub limit: Option<i64>,
}

// ============================================================================
// Workflow Requests
// ============================================================================

/// Leadership review: comment and forward to Management
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ForwardTicketRequest {
    #[validate(length(min = 5, max = 1000, message = "Comment must be 5-1000 characters"))]
    pub comment: String,
}

/// Management records the action taken
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordActionRequest {
    #[validate(length(min = 5, max = 1000, message = "Action must be 5-1000 characters"))]
    pub action: String,
}

/// Auditor decision.
///
/// The decision is a typed enum, so unknown values are rejected during
/// deserialization, before anything is mutated.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DecideRequest {
    pub decision: AuditorDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_bounds() {
        let ok = CreateTicketRequest {
            title: "VPN outage".to_string(),
            description: "Site-to-site VPN down since 09:00".to_string(),
            priority: Priority::High,
        };
        assert!(ok.validate().is_ok());

        let short_title = CreateTicketRequest {
            title: "no".to_string(),
            ..ok.clone()
        };
        assert!(short_title.validate().is_err());

        let short_description = CreateTicketRequest {
            description: "too short".to_string(),
            ..ok
        };
        assert!(short_description.validate().is_err());
    }

    #[test]
    fn test_unknown_decision_rejected_at_deserialization() {
        let err = serde_json::from_str::<DecideRequest>(r#"{"decision":"MAYBE"}"#);
        assert!(err.is_err());

        let ok: DecideRequest = serde_json::from_str(r#"{"decision":"REVERIFY"}"#).unwrap();
        assert_eq!(ok.decision, AuditorDecision::Reverify);
    }

    #[test]
    fn test_list_request_defaults() {
        let req: ListTicketsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.status.is_none());
        assert!(req.page.is_none());
    }
}
