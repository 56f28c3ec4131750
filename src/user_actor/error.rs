//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The registration payload is missing its username.
    #[error("Username is required")]
    ValidationError,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
