//! # Order Client
//!
//! High‑level API for the order store.
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
///
/// Appending does not validate anything; callers confirm the user and product first.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Appends an order and returns it with its allocated `ordN` id.
    #[instrument(skip(self))]
    pub async fn append(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
