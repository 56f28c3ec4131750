// Response types shared by every service

use crate::order_actor::OrderError;
use crate::user_actor::UserError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

/// API error type that converts domain errors to HTTP responses
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        Self::new(err.status_code(), err.user_message())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::ValidationError => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            UserError::ActorCommunicationError(_) => Self::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::Upstream;

    #[test]
    fn test_order_errors_keep_their_status_and_message() {
        let err = ApiError::from(OrderError::UpstreamTimeout(Upstream::User));
        assert_eq!(err.status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(err.message, "User service timed out");
    }

    #[test]
    fn test_store_failures_become_generic_500() {
        let err = ApiError::from(UserError::ActorCommunicationError("Actor closed".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal error");

        let err = ApiError::from(OrderError::ActorCommunicationError("Actor closed".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Internal error");
    }

    #[test]
    fn test_user_validation_is_bad_request() {
        let err = ApiError::from(UserError::ValidationError);
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Username is required");
    }
}
