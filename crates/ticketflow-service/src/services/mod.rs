//! Business logic services
//!
//! Service layer implementations handling validation, orchestration of
//! workflow transitions, and audit trail bookkeeping. Every operation takes
//! the acting user as an explicit [`ticketflow_core::ActorContext`].

pub mod audit;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod ticket;
pub mod workflow;

// Re-export all services for convenience
pub use audit::AuditService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dashboard::DashboardService;
pub use error::{ServiceError, ServiceResult};
pub use ticket::TicketService;
pub use workflow::{AuditOutcome, TransitionReceipt, WorkflowService};
