//! User roster record
//!
//! Read-only view of an account in the external roster, used by the
//! dashboard engine's user-sourced widgets.

use crate::value_objects::{Role, UserStatus};

/// A user account as exposed by the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub status: UserStatus,
}

impl UserAccount {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        status: UserStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            status,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
