//! Audit log wire model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ticketflow_core::{AuditAction, AuditEntity, AuditLogEntry, Role, TicketStatus};

use super::de;

/// Audit log record as the entity store serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogModel {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de::flexible_id_opt"
    )]
    pub id: Option<String>,
    pub entity: AuditEntity,
    #[serde(deserialize_with = "de::flexible_id")]
    pub entity_id: String,
    pub user_name: String,
    pub role: Role,
    pub action: AuditAction,
    #[serde(default, deserialize_with = "de::empty_as_none")]
    pub previous_state: Option<TicketStatus>,
    pub new_state: TicketStatus,
    pub timestamp: DateTime<Utc>,
}

impl From<&AuditLogEntry> for AuditLogModel {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            id: entry.id.clone(),
            entity: entry.entity,
            entity_id: entry.entity_id.clone(),
            user_name: entry.user_name.clone(),
            role: entry.role,
            action: entry.action,
            previous_state: entry.previous_state,
            new_state: entry.new_state,
            timestamp: entry.timestamp,
        }
    }
}

impl From<AuditLogModel> for AuditLogEntry {
    fn from(model: AuditLogModel) -> Self {
        Self {
            id: model.id,
            entity: model.entity,
            entity_id: model.entity_id,
            user_name: model.user_name,
            role: model.role,
            action: model.action,
            previous_state: model.previous_state,
            new_state: model.new_state,
            timestamp: model.timestamp,
        }
    }
}
