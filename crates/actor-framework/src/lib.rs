//! # Actor Framework
//!
//! Building blocks for in-memory stores that are owned by a single Tokio task and reached
//! through a cloneable handle. Every store in the system (users, products, orders) is the same
//! generic actor instantiated with a different record type.
//!
//! ## Why an actor per store?
//!
//! - Isolated state (no shared memory, no locks)
//! - Sequential processing within each actor, so sequence counters are never raced
//! - A cheap, cloneable handle that HTTP handlers can own
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - The record type, its identifier and creation rules
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and the sequence counter
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Member {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct MemberCreate { name: String }
//! #[derive(Debug, thiserror::Error)] #[error("{0}")] struct MemberError(String);
//!
//! impl ActorEntity for Member {
//!     type Id = u32;
//!     type Create = MemberCreate;
//!     type Error = MemberError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: MemberCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Member>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let member = client.create(MemberCreate { name: "Alice".into() }).await.unwrap();
//!     let fetched = client.get(member.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.name, "Alice");
//!     assert_eq!(client.len().await.unwrap(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so wrappers
//! around a store can be tested without spawning the store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
