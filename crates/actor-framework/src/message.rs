//! # Store Requests
//!
//! The messages a [`ResourceClient`](crate::ResourceClient) sends to its
//! [`ResourceActor`](crate::ResourceActor). Each carries the oneshot sender the actor replies on.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Reply channel for one request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Requests understood by a store actor.
///
/// Stores are append-only: records are created and read, never changed or removed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    /// Allocate the next id and store the record built from `params`.
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },

    /// Look a record up by id.
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },

    /// Report the number of stored records.
    Len { respond_to: Response<usize> },
}
