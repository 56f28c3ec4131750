//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored record (User, Product, Order, …)
//! must implement to be owned by the generic `ResourceActor`. It fixes the identifier type, the
//! creation payload and the error type, and turns a freshly allocated sequence number plus a
//! payload into the stored record.
//!
//! # Architecture Note
//! The store logic (sequence counter, map, request loop) is written *once* in `ResourceActor`.
//! Each record type only decides how its identifier is rendered and whether a creation payload
//! is acceptable.
//!
//! Associated types keep the stores apart: a `User` store takes a `UserCreate` payload and you
//! can't accidentally hand it an `OrderCreate`.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be stored by a `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record.
    ///
    /// `From<u32>` renders the actor's sequence number into the public identifier
    /// (for example `3` into `"ord3"`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new record (DTO - Data Transfer Object).
    ///
    /// Read-only stores that are only ever seeded can use [`std::convert::Infallible`].
    type Create: Send + Sync + Debug;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from the allocated ID and the payload.
    ///
    /// Returning an error rejects the payload. The sequence number is only consumed when this
    /// succeeds, so rejected payloads never leave gaps in the identifier sequence.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;
}
