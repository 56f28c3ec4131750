//! # Order Actor
//!
//! The order store: an append-only sequence of placed orders. Identifiers are allocated by the
//! actor as `ord1`, `ord2`, … and never reused.
//!
//! The store itself performs no validation. Orders are only appended by the
//! [`OrderOrchestrator`](crate::orchestrator::OrderOrchestrator) after the user and
//! product services confirmed both references.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new() -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, OrderClient::new(generic_client))
}
