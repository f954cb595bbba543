//! Data transfer objects

pub mod requests;
pub mod responses;

pub use requests::{
    CreateTicketRequest, DecideRequest, ForwardTicketRequest, ListTicketsRequest,
    RecordActionRequest,
};
pub use responses::{
    AuditLogEntryResponse, DashboardResponse, HealthResponse, ReadinessResponse, TicketResponse,
    TransitionReceiptResponse,
};
