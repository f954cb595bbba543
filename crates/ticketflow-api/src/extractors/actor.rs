//! Actor identity extractor
//!
//! Authentication lives outside this service; the gateway in front of it
//! asserts who the caller is via `x-actor-*` headers. This extractor turns
//! those headers into the request-scoped [`ActorContext`] every workflow
//! operation requires.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use ticketflow_core::{ActorContext, Role};

use crate::response::ApiError;

/// Header carrying the actor's id
pub const ACTOR_ID_HEADER: &str = "x-actor-id";
/// Header carrying the actor's display name (optional; defaults to the id)
pub const ACTOR_NAME_HEADER: &str = "x-actor-name";
/// Header carrying the actor's role
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";

/// The acting user, extracted from the identity headers
#[derive(Debug, Clone)]
pub struct ActorIdentity(pub ActorContext);

impl ActorIdentity {
    /// Borrow the inner actor context
    pub fn context(&self) -> &ActorContext {
        &self.0
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for ActorIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header(parts, ACTOR_ID_HEADER).ok_or(ApiError::MissingActor)?;
        let role_raw = header(parts, ACTOR_ROLE_HEADER).ok_or(ApiError::MissingActor)?;

        let role: Role = role_raw.parse().map_err(|_| {
            tracing::warn!(role = %role_raw, "Unknown actor role header");
            ApiError::InvalidActor(format!("unknown role: {role_raw}"))
        })?;

        let user_name = header(parts, ACTOR_NAME_HEADER).unwrap_or(user_id);

        Ok(ActorIdentity(ActorContext::new(user_id, user_name, role)))
    }
}
