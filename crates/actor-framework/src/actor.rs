//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a store of records. It
//! implements the "Server" side of the Actor Model, processing messages sequentially and
//! ensuring exclusive access to the store and its sequence counter.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of records.
///
/// # Concurrency Model
///
/// Each `ResourceActor` processes its messages *sequentially* in a loop, so the `store` and the
/// `next_id` counter never need a `Mutex`. Two HTTP requests creating users at the same time are
/// serialized by the channel and always receive distinct identifiers.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` (or `with_records()` for a seeded store) to get the
///     `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every clone of the client; the loop drains and exits.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32, title: String }
/// #[derive(Debug)] struct TicketCreate { title: String }
/// #[derive(Debug, thiserror::Error)] #[error("empty title")] struct TicketError;
///
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = TicketCreate;
///     type Error = TicketError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, TicketError> {
///         if params.title.is_empty() { return Err(TicketError); }
///         Ok(Self { id, title: params.title })
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run());
///
///     let ticket = client.create(TicketCreate { title: "first".into() }).await.unwrap();
///     assert_eq!(ticket.id, 1);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**:
///     1. Converts the current `next_id` into `T::Id`.
///     2. Calls `T::from_create_params` to build the record.
///     3. On success inserts it, advances `next_id` and returns a copy.
///     4. On failure the counter is left untouched.
///
/// * **Get**: Returns a clone of the record if present, or `None`.
///
/// * **Len**: Returns the number of stored records.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new empty `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_records(buffer_size, Vec::new())
    }

    /// Creates a `ResourceActor` whose store is preloaded with `records`.
    ///
    /// Seeded records keep their own identifiers; the sequence counter still starts at 1.
    pub fn with_records(
        buffer_size: usize,
        records: impl IntoIterator<Item = T>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = records
            .into_iter()
            .map(|record| (record.id().clone(), record))
            .collect();
        let actor = Self {
            receiver,
            store,
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Just the type name (e.g., "Order" instead of "microshop::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
