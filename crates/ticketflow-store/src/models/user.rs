//! User roster wire model

use serde::{Deserialize, Serialize};

use ticketflow_core::{Role, UserAccount, UserStatus};

use super::de;

/// User record as the roster serializes it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserModel {
    #[serde(deserialize_with = "de::flexible_id")]
    pub id: String,
    pub name: String,
    pub role: Role,
    pub status: UserStatus,
}

impl From<UserModel> for UserAccount {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: model.role,
            status: model.status,
        }
    }
}

impl From<&UserAccount> for UserModel {
    fn from(user: &UserAccount) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
            status: user.status,
        }
    }
}
