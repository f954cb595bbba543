//! Actor roles
//!
//! The role determines which workflow transitions an actor may perform.
//! Wire spellings follow the user roster records; note the store spells the
//! auditor role `AUDITORS`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the five platform roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "OPERATIONS")]
    Operations,
    #[serde(rename = "LEADERSHIP")]
    Leadership,
    #[serde(rename = "MANAGEMENT")]
    Management,
    #[serde(rename = "AUDITORS", alias = "AUDITOR")]
    Auditor,
    #[serde(rename = "ADMIN")]
    Admin,
}

impl Role {
    /// Wire spelling of this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operations => "OPERATIONS",
            Self::Leadership => "LEADERSHIP",
            Self::Management => "MANAGEMENT",
            Self::Auditor => "AUDITORS",
            Self::Admin => "ADMIN",
        }
    }

    /// All roles, in stage order (Admin last)
    pub const ALL: [Role; 5] = [
        Role::Operations,
        Role::Leadership,
        Role::Management,
        Role::Auditor,
        Role::Admin,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPERATIONS" => Ok(Self::Operations),
            "LEADERSHIP" => Ok(Self::Leadership),
            "MANAGEMENT" => Ok(Self::Management),
            "AUDITORS" | "AUDITOR" => Ok(Self::Auditor),
            "ADMIN" => Ok(Self::Admin),
            other => Err(DomainError::Validation(format!("unknown role: {other}"))),
        }
    }
}
