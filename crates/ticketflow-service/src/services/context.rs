//! Service context - dependency container for services
//!
//! Holds the repository ports every service operates through.

use std::sync::Arc;

use ticketflow_core::{AuditLogRepository, TicketRepository, UserDirectory};

/// Service context containing all dependencies.
///
/// Passed by reference into each service; the concrete store behind the
/// ports (REST client or in-memory fake) is chosen at server startup.
#[derive(Clone)]
pub struct ServiceContext {
    ticket_repo: Arc<dyn TicketRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    user_directory: Arc<dyn UserDirectory>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        ticket_repo: Arc<dyn TicketRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        user_directory: Arc<dyn UserDirectory>,
    ) -> Self {
        Self {
            ticket_repo,
            audit_repo,
            user_directory,
        }
    }

    /// Get the ticket repository
    pub fn ticket_repo(&self) -> &dyn TicketRepository {
        self.ticket_repo.as_ref()
    }

    /// Get the audit log repository
    pub fn audit_repo(&self) -> &dyn AuditLogRepository {
        self.audit_repo.as_ref()
    }

    /// Get the user directory
    pub fn user_directory(&self) -> &dyn UserDirectory {
        self.user_directory.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("ticket_repo", &"dyn TicketRepository")
            .field("audit_repo", &"dyn AuditLogRepository")
            .field("user_directory", &"dyn UserDirectory")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    ticket_repo: Option<Arc<dyn TicketRepository>>,
    audit_repo: Option<Arc<dyn AuditLogRepository>>,
    user_directory: Option<Arc<dyn UserDirectory>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket_repo(mut self, repo: Arc<dyn TicketRepository>) -> Self {
        self.ticket_repo = Some(repo);
        self
    }

    pub fn audit_repo(mut self, repo: Arc<dyn AuditLogRepository>) -> Self {
        self.audit_repo = Some(repo);
        self
    }

    pub fn user_directory(mut self, directory: Arc<dyn UserDirectory>) -> Self {
        self.user_directory = Some(directory);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.ticket_repo
                .ok_or_else(|| super::error::ServiceError::validation("ticket_repo is required"))?,
            self.audit_repo
                .ok_or_else(|| super::error::ServiceError::validation("audit_repo is required"))?,
            self.user_directory.ok_or_else(|| {
                super::error::ServiceError::validation("user_directory is required")
            })?,
        ))
    }
}
