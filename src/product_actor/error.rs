//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
