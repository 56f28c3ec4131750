//! # Product Actor
//!
//! The product catalog: a read-only store seeded from [`catalog::seed`] when the actor is built.
//! It answers lookups by id and nothing else.

pub mod catalog;
pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor, preloaded with the catalog, and its client.
pub fn new() -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::with_records(32, catalog::seed());
    (actor, ProductClient::new(generic_client))
}
