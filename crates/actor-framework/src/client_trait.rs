//! # ActorClient Trait
//!
//! Provides a common interface for store-specific clients, adding default `get` and `count`
//! methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)] struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug, thiserror::Error)] #[error("note error: {0}")] struct NoteError(String);
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Error = NoteError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, NoteError> { Ok(Self { id }) }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> NoteError { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get() and count() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.count().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Number of records currently stored.
    async fn count(&self) -> Result<usize, Self::Error> {
        self.inner().len().await.map_err(Self::map_error)
    }
}
