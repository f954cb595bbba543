//! Request-scoped actor identity
//!
//! Every workflow operation receives the acting user explicitly instead of
//! reading it from ambient session state.

use super::Role;

/// The actor performing an operation: who they are and what role they act in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    /// Id of the acting user (opaque, assigned by the roster)
    pub user_id: String,
    /// Display name recorded in audit entries
    pub user_name: String,
    /// Role the actor performs the operation in
    pub role: Role,
}

impl ActorContext {
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            role,
        }
    }
}
