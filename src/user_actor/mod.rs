//! # User Actor
//!
//! The user directory: registration and lookup-by-id, backed by a
//! [`ResourceActor<User>`](actor_framework::ResourceActor).
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ```rust
//! use microshop::user_actor;
//! use microshop::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new();
//!     tokio::spawn(actor.run());
//!
//!     let user = client.create_user(UserCreate::new("alice")).await?;
//!     assert_eq!(user.id.to_string(), "user1");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new() -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(32);
    (actor, UserClient::new(generic_client))
}
