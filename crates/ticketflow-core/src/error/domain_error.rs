//! Domain errors - error types for the domain layer
//!
//! The taxonomy: Validation, RoleCapability, StaleState (status precondition
//! or version conflict), NotFound, Transport. Validation and RoleCapability
//! are always raised before any mutation.

use thiserror::Error;

use crate::value_objects::{Role, TicketId, TicketStatus};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found
    // =========================================================================
    #[error("Ticket not found: {0}")]
    TicketNotFound(TicketId),

    #[error("Audit log entry not found: {0}")]
    AuditEntryNotFound(String),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Role capability
    // =========================================================================
    #[error("Role {role} cannot {action}")]
    RoleCapability { role: Role, action: &'static str },

    // =========================================================================
    // Stale state
    // =========================================================================
    #[error("Ticket is {actual}, expected {expected}")]
    UnexpectedStatus {
        expected: &'static str,
        actual: TicketStatus,
    },

    #[error("Ticket {id} was modified concurrently (expected version {expected}, found {found})")]
    VersionConflict {
        id: TicketId,
        expected: i64,
        found: i64,
    },

    // =========================================================================
    // Infrastructure (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::TicketNotFound(_) => "UNKNOWN_TICKET",
            Self::AuditEntryNotFound(_) => "UNKNOWN_AUDIT_ENTRY",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RoleCapability { .. } => "ROLE_NOT_PERMITTED",
            Self::UnexpectedStatus { .. } | Self::VersionConflict { .. } => "STALE_STATE",
            Self::Transport(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TicketNotFound(_) | Self::AuditEntryNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a role capability error
    pub fn is_capability(&self) -> bool {
        matches!(self, Self::RoleCapability { .. })
    }

    /// Check if this is a stale-state conflict (status precondition no longer
    /// holds, or the version token moved underneath us)
    pub fn is_stale_state(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedStatus { .. } | Self::VersionConflict { .. }
        )
    }

    /// Check if this is a transport/store failure
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
