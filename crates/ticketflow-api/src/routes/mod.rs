//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{audit_logs, dashboards, health, tickets, workflow};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately so probes bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(ticket_routes())
        .merge(audit_routes())
        .merge(dashboard_routes())
}

/// Ticket CRUD and workflow transitions
fn ticket_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets", post(tickets::create_ticket))
        .route("/tickets", get(tickets::list_tickets))
        .route("/tickets/:ticket_id", get(tickets::get_ticket))
        // Role-gated transitions
        .route("/tickets/:ticket_id/forward", post(workflow::forward_ticket))
        .route("/tickets/:ticket_id/action", post(workflow::record_action))
        .route("/tickets/:ticket_id/decision", post(workflow::decide_ticket))
}

/// Audit trail routes
fn audit_routes() -> Router<AppState> {
    Router::new()
        .route("/tickets/:ticket_id/audit", get(audit_logs::get_ticket_audit))
        .route("/audit-logs", get(audit_logs::list_audit_logs))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboards/:role", get(dashboards::get_dashboard))
}
