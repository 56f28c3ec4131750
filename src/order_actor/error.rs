//! Error types for the Order actor and the order-creation flow.
//!
//! Every variant is terminal for the request that raised it. [`OrderError::status_code`]
//! and [`OrderError::user_message`] give the HTTP contract; `Display` is what gets logged.

use crate::upstream::Upstream;
use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while placing an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// `user_id` or `product_id` is missing from the request.
    #[error("user_id and product_id are required")]
    ValidationError,

    /// The user service reported the user as absent.
    #[error("User '{0}' not found")]
    UserNotFound(String),

    /// The product service reported the product as absent.
    #[error("Product '{0}' not found")]
    ProductNotFound(String),

    /// The upstream call exceeded its deadline.
    #[error("{} service timed out", .0.title())]
    UpstreamTimeout(Upstream),

    /// The upstream could not be reached (connection refused, DNS failure).
    #[error("Could not connect to {0} service")]
    UpstreamUnavailable(Upstream),

    /// The upstream answered with an unexpected status or the exchange failed otherwise.
    #[error("Failed to communicate with {0} service")]
    UpstreamError(Upstream),

    /// An error occurred while communicating with the order store.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::ValidationError => StatusCode::BAD_REQUEST,
            OrderError::UserNotFound(_) | OrderError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            OrderError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            OrderError::UpstreamUnavailable(_) | OrderError::UpstreamError(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            OrderError::ActorCommunicationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. Store failures are reduced to a generic text.
    pub fn user_message(&self) -> String {
        match self {
            OrderError::ActorCommunicationError(_) => "Internal error".to_string(),
            other => other.to_string(),
        }
    }
}
