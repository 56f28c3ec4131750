//! # Store Handle
//!
//! [`ResourceClient`] is how the rest of the process talks to a store actor.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// Cloneable handle on a `ResourceActor<T>`.
///
/// Each call sends one [`ResourceRequest`] and waits for the actor's reply on a fresh oneshot
/// channel. Clones share the actor; the actor stops once the last clone is dropped, so every
/// HTTP handler can simply own one.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    /// Stores a new record and returns it with its allocated ID.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// A copy of the record stored under `id`, if any.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Number of records in the store.
    pub async fn len(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Len { respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T> + Send,
    ) -> Result<R, FrameworkError> {
        let (respond_to, reply) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        reply.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
