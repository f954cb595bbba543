//! Transition planning for the ticket workflow
//!
//! Stage order: SUBMITTED → FORWARDED_TO_MANAGEMENT → ACTION_TAKEN →
//! {CLOSED, REVERIFY}, with REVERIFY looping back to Management for a revised
//! action. No transition may skip a stage.
//!
//! Checks run in a fixed order so a rejected attempt provably precedes any
//! mutation: input validation, then role capability, then the source-state
//! precondition.

use crate::entities::{Ticket, TicketPatch};
use crate::error::DomainError;
use crate::value_objects::{ActorContext, AuditAction, AuditorDecision, Role, TicketStatus};

/// A role-specific action that drives one transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    /// Leadership reviews a submitted ticket and forwards it to Management
    Forward { comment: String },
    /// Management records the action taken (also accepted from the REVERIFY
    /// loop, replacing the earlier action)
    RecordAction { action: String },
    /// Auditor decides: ACCEPTED/REJECTED close the ticket, REVERIFY sends it
    /// back to Management
    Decide { decision: AuditorDecision },
}

impl WorkflowAction {
    /// Human-readable label used in capability errors
    fn describe(&self) -> &'static str {
        match self {
            Self::Forward { .. } => "forward a ticket to management",
            Self::RecordAction { .. } => "record a management action",
            Self::Decide { .. } => "record an auditor decision",
        }
    }

    /// The single role permitted to perform this action
    fn required_role(&self) -> Role {
        match self {
            Self::Forward { .. } => Role::Leadership,
            Self::RecordAction { .. } => Role::Management,
            Self::Decide { .. } => Role::Auditor,
        }
    }

    /// Source states this action may fire from
    fn accepted_from(&self) -> &'static [TicketStatus] {
        match self {
            Self::Forward { .. } => &[TicketStatus::Submitted],
            Self::RecordAction { .. } => {
                &[TicketStatus::ForwardedToManagement, TicketStatus::Reverify]
            }
            Self::Decide { .. } => &[TicketStatus::ActionTaken],
        }
    }

    /// Spelled-out precondition for stale-state errors
    fn expected_label(&self) -> &'static str {
        match self {
            Self::Forward { .. } => "SUBMITTED",
            Self::RecordAction { .. } => "FORWARDED_TO_MANAGEMENT or REVERIFY",
            Self::Decide { .. } => "ACTION_TAKEN",
        }
    }
}

/// The outcome of planning a transition: where the ticket goes, which fields
/// change, and what the audit trail should record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    pub from: TicketStatus,
    pub to: TicketStatus,
    pub patch: TicketPatch,
    pub audit_action: AuditAction,
}

/// Plan a transition without mutating anything.
///
/// # Errors
/// - `Validation` for malformed input (blank comment/action text)
/// - `RoleCapability` if the actor's role lacks the required capability
/// - `UnexpectedStatus` if the ticket is not in an accepted source state
pub fn plan(
    ticket: &Ticket,
    actor: &ActorContext,
    action: &WorkflowAction,
) -> Result<TransitionPlan, DomainError> {
    validate_input(action)?;

    if actor.role != action.required_role() {
        return Err(DomainError::RoleCapability {
            role: actor.role,
            action: action.describe(),
        });
    }

    if !action.accepted_from().contains(&ticket.status) {
        return Err(DomainError::UnexpectedStatus {
            expected: action.expected_label(),
            actual: ticket.status,
        });
    }

    let from = ticket.status;
    Ok(match action {
        WorkflowAction::Forward { comment } => TransitionPlan {
            from,
            to: TicketStatus::ForwardedToManagement,
            patch: TicketPatch {
                status: Some(TicketStatus::ForwardedToManagement),
                leadership_comment: Some(comment.trim().to_string()),
                ..TicketPatch::default()
            },
            audit_action: AuditAction::LeadershipForward,
        },
        WorkflowAction::RecordAction { action } => TransitionPlan {
            from,
            to: TicketStatus::ActionTaken,
            patch: TicketPatch {
                status: Some(TicketStatus::ActionTaken),
                management_action: Some(action.trim().to_string()),
                ..TicketPatch::default()
            },
            audit_action: AuditAction::ManagementAction,
        },
        WorkflowAction::Decide { decision } => {
            let to = if decision.closes_ticket() {
                TicketStatus::Closed
            } else {
                TicketStatus::Reverify
            };
            TransitionPlan {
                from,
                to,
                patch: TicketPatch {
                    status: Some(to),
                    auditor_decision: Some(*decision),
                    ..TicketPatch::default()
                },
                audit_action: match decision {
                    AuditorDecision::Accepted => AuditAction::AuditorAccepted,
                    AuditorDecision::Rejected => AuditAction::AuditorRejected,
                    AuditorDecision::Reverify => AuditAction::AuditorReverify,
                },
            }
        }
    })
}

fn validate_input(action: &WorkflowAction) -> Result<(), DomainError> {
    match action {
        WorkflowAction::Forward { comment } if comment.trim().is_empty() => Err(
            DomainError::Validation("leadership comment must not be empty".to_string()),
        ),
        WorkflowAction::RecordAction { action } if action.trim().is_empty() => Err(
            DomainError::Validation("management action must not be empty".to_string()),
        ),
        _ => Ok(()),
    }
}
