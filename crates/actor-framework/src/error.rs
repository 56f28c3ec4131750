//! # Framework Errors
//!
//! Failures of the store plumbing, shared by every actor and client. Each store's client maps
//! these into its own error type.

#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's mailbox is closed: the actor task has stopped.
    #[error("Store actor is not running")]
    ActorClosed,

    /// The actor received the request but never replied.
    #[error("Store actor dropped the reply")]
    ActorDropped,

    /// [`ActorEntity::from_create_params`](crate::ActorEntity::from_create_params) rejected the
    /// payload. The boxed value is the entity's own error type.
    #[error("Rejected by entity: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
