//! Repository traits (ports) - define the interface for the entity store
//!
//! The domain layer defines what it needs from the external store; the
//! infrastructure layer provides the implementations (REST client or the
//! in-memory fake).

use async_trait::async_trait;

use crate::entities::{AuditEntity, AuditLogEntry, Ticket, TicketPatch, UserAccount};
use crate::error::DomainError;
use crate::value_objects::{Priority, TicketId, TicketStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Filter and pagination options for ticket listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    /// Free-text search over title and description
    pub search: Option<String>,
    /// 1-based page number
    pub page: i64,
    pub limit: i64,
}

impl Default for TicketQuery {
    fn default() -> Self {
        Self {
            status: None,
            priority: None,
            search: None,
            page: 1,
            limit: 10,
        }
    }
}

// ============================================================================
// Ticket Repository
// ============================================================================

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Find ticket by id
    async fn find_by_id(&self, id: &TicketId) -> RepoResult<Option<Ticket>>;

    /// List tickets matching the query, in creation order
    async fn list(&self, query: &TicketQuery) -> RepoResult<Vec<Ticket>>;

    /// Persist a new ticket; the store assigns the final id
    async fn create(&self, ticket: &Ticket) -> RepoResult<Ticket>;

    /// Conditionally apply a partial update.
    ///
    /// The update only goes through if the stored version still equals
    /// `expected_version`; otherwise `VersionConflict` is returned and the
    /// record is left untouched.
    async fn update(
        &self,
        id: &TicketId,
        patch: &TicketPatch,
        expected_version: i64,
    ) -> RepoResult<Ticket>;
}

// ============================================================================
// Audit Log Repository
// ============================================================================

/// Append-only audit log. There is deliberately no update or delete here:
/// the log is write-once, read-many.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Validate and persist one entry; returns the stored entry with its
    /// assigned id
    async fn append(&self, entry: &AuditLogEntry) -> RepoResult<AuditLogEntry>;

    /// Entries for one entity, in non-decreasing timestamp order
    async fn for_entity(&self, entity: AuditEntity, entity_id: &str)
        -> RepoResult<Vec<AuditLogEntry>>;

    /// All entries, in non-decreasing timestamp order
    async fn list_all(&self) -> RepoResult<Vec<AuditLogEntry>>;
}

// ============================================================================
// User Directory
// ============================================================================

/// Read-only roster of user accounts, used by user-sourced dashboard widgets.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list(&self) -> RepoResult<Vec<UserAccount>>;
}
