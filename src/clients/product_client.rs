//! # Product Client
//!
//! High‑level API for the product catalog. Lookups come from the [`ActorClient`] defaults.
use crate::model::Product;
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::ActorCommunicationError(e.to_string())
    }
}
