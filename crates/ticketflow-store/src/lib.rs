//! # ticketflow-store
//!
//! Store layer implementing the repository traits from `ticketflow-core`.
//!
//! Two backends are provided:
//!
//! - [`rest`]: a reqwest client speaking the external entity store's REST
//!   contract (`/tickets`, `/auditLogs`, `/users`)
//! - [`memory`]: an in-memory fake with real compare-and-swap semantics,
//!   used by tests and as the embedded store for local development

pub mod memory;
pub mod models;
pub mod rest;

// Re-export commonly used types
pub use memory::{MemAuditLogStore, MemTicketStore, MemUserDirectory};
pub use rest::{RestAuditLogStore, RestClient, RestStoreConfig, RestTicketStore, RestUserDirectory};
