//! In-memory implementation of UserDirectory

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use ticketflow_core::{RepoResult, Role, UserAccount, UserDirectory, UserStatus};

/// User roster held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemUserDirectory {
    users: Arc<RwLock<Vec<UserAccount>>>,
}

impl MemUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster seeded with the given accounts
    pub fn with_users(users: Vec<UserAccount>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Small demo roster covering every role, for local development
    pub fn with_demo_roster() -> Self {
        Self::with_users(vec![
            UserAccount::new("1", "Omar Ops", Role::Operations, UserStatus::Active),
            UserAccount::new("2", "Leah Lead", Role::Leadership, UserStatus::Active),
            UserAccount::new("3", "Mina Manager", Role::Management, UserStatus::Active),
            UserAccount::new("4", "Arun Auditor", Role::Auditor, UserStatus::Active),
            UserAccount::new("5", "Ada Admin", Role::Admin, UserStatus::Inactive),
        ])
    }
}

#[async_trait]
impl UserDirectory for MemUserDirectory {
    async fn list(&self) -> RepoResult<Vec<UserAccount>> {
        Ok(self.users.read().clone())
    }
}
