//! Wire models for the external entity store
//!
//! The store speaks camelCase JSON; older records carry quirks these models
//! absorb (numeric ids, empty strings standing in for unset optionals,
//! records predating the version token).

mod audit_log;
mod ticket;
mod user;

pub use audit_log::AuditLogModel;
pub use ticket::{TicketModel, TicketPatchModel};
pub use user::UserModel;

pub(crate) mod de {
    //! Deserialization helpers for store-side quirks

    use serde::{Deserialize, Deserializer};

    /// Ids may arrive as JSON numbers or strings; normalize to `String`.
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(i64),
        Str(String),
    }

    pub fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Num(n) => n.to_string(),
            RawId::Str(s) => s,
        })
    }

    pub fn flexible_id_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<RawId> = Option::deserialize(deserializer)?;
        Ok(raw.map(|r| match r {
            RawId::Num(n) => n.to_string(),
            RawId::Str(s) => s,
        }))
    }

    /// Optional enum/text fields the store records as `""` when unset.
    pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => s.parse::<T>().map(Some).map_err(serde::de::Error::custom),
        }
    }

    pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }

    pub(crate) fn default_version() -> i64 {
        1
    }
}
