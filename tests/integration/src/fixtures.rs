//! Test fixtures: actors, request bodies, and response shapes

use chrono::{DateTime, Utc};
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde_json::{json, Value};

/// An acting user, applied to requests as identity headers
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

impl Actor {
    pub fn operations() -> Self {
        Self {
            id: "100",
            name: "Omar Ops",
            role: "OPERATIONS",
        }
    }

    pub fn leadership() -> Self {
        Self {
            id: "200",
            name: "Leah Lead",
            role: "LEADERSHIP",
        }
    }

    pub fn management() -> Self {
        Self {
            id: "300",
            name: "Mina Manager",
            role: "MANAGEMENT",
        }
    }

    pub fn auditor() -> Self {
        Self {
            id: "400",
            name: "Arun Auditor",
            role: "AUDITORS",
        }
    }

    pub fn admin() -> Self {
        Self {
            id: "500",
            name: "Ada Admin",
            role: "ADMIN",
        }
    }

    /// Attach the identity headers to a request
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("x-actor-id", self.id)
            .header("x-actor-name", self.name)
            .header("x-actor-role", self.role)
    }
}

// ============================================================================
// Request bodies
// ============================================================================

pub fn raise_request(title: &str, priority: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} - reported by the operations desk"),
        "priority": priority,
    })
}

pub fn forward_request(comment: &str) -> Value {
    json!({ "comment": comment })
}

pub fn action_request(action: &str) -> Value {
    json!({ "action": action })
}

pub fn decision_request(decision: &str) -> Value {
    json!({ "decision": decision })
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketBody {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    #[serde(default)]
    pub leadership_comment: Option<String>,
    #[serde(default)]
    pub management_action: Option<String>,
    #[serde(default)]
    pub auditor_decision: Option<String>,
    pub raised_by: String,
    pub version: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptBody {
    pub ticket: TicketBody,
    pub audit_recorded: bool,
    #[serde(default)]
    pub audit_entry: Option<AuditEntryBody>,
    #[serde(default)]
    pub warning: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryBody {
    pub id: Option<String>,
    pub entity: String,
    pub entity_id: String,
    pub user_name: String,
    pub role: String,
    pub action: String,
    #[serde(default)]
    pub previous_state: Option<String>,
    pub new_state: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct DashboardBody {
    pub role: String,
    pub widgets: Vec<WidgetBody>,
}

#[derive(Debug, Deserialize)]
pub struct WidgetBody {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub value: Value,
}
