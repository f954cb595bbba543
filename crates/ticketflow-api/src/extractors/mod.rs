//! Request extractors

mod actor;
mod validated;

pub use actor::{ActorIdentity, ACTOR_ID_HEADER, ACTOR_NAME_HEADER, ACTOR_ROLE_HEADER};
pub use validated::ValidatedJson;
