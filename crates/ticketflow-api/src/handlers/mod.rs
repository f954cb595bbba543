//! Request handlers

pub mod audit_logs;
pub mod dashboards;
pub mod health;
pub mod tickets;
pub mod workflow;
