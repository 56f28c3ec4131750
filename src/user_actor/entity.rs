//! [`ActorEntity`] implementation for [`User`].

use super::UserError;
use crate::model::{User, UserCreate, UserId};
use actor_framework::ActorEntity;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Error = UserError;

    fn id(&self) -> &UserId {
        &self.id
    }

    /// Rejects a missing or empty username; the id is only consumed on success.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        match params.username {
            Some(username) if !username.is_empty() => Ok(Self { id, username }),
            _ => Err(UserError::ValidationError),
        }
    }
}
