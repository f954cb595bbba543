//! # ticketflow-service
//!
//! Application layer containing workflow orchestration, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the surface the API crate consumes
pub use dto::{
    AuditLogEntryResponse, CreateTicketRequest, DashboardResponse, DecideRequest,
    ForwardTicketRequest, HealthResponse, ListTicketsRequest, ReadinessResponse,
    RecordActionRequest, TicketResponse, TransitionReceiptResponse,
};
pub use services::{
    AuditOutcome, AuditService, DashboardService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TicketService, TransitionReceipt, WorkflowService,
};
