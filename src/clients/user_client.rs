//! # User Client
//!
//! High‑level API for the user directory. It wraps a `ResourceClient<User>` and turns
//! framework errors back into [`UserError`].
use crate::model::{User, UserCreate};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers a user and returns the stored record with its allocated id.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(user_error) => *user_error,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_validation_error_survives_the_actor_boundary() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(UserError::ValidationError)));
        let client = UserClient::new(mock.client());

        let result = client.create_user(UserCreate { username: None }).await;

        assert_eq!(result, Err(UserError::ValidationError));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId::from(1)).return_err(FrameworkError::ActorClosed);
        let client = UserClient::new(mock.client());

        let result = client.get(UserId::from(1)).await;

        assert!(matches!(result, Err(UserError::ActorCommunicationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_create_then_lookup_with_real_actor() {
        let (actor, client) = crate::user_actor::new();
        tokio::spawn(actor.run());

        let alice = client.create_user(UserCreate::new("alice")).await.unwrap();
        let bob = client.create_user(UserCreate::new("bob")).await.unwrap();
        assert_eq!(alice.id, UserId("user1".into()));
        assert_eq!(bob.id, UserId("user2".into()));

        let fetched = client.get(UserId("user2".into())).await.unwrap();
        assert_eq!(fetched, Some(bob));
        assert!(client.get(UserId("userX".into())).await.unwrap().is_none());
    }
}
