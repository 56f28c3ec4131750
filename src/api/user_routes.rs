// Routes of the user service

use crate::api::{health, ApiError};
use crate::clients::UserClient;
use crate::model::{User, UserCreate, UserId};
use actor_framework::ActorClient;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the user service router around a running user store.
pub fn router(users: UserClient) -> Router {
    Router::new()
        .route("/user", post(create_user))
        .route("/user/:user_id", get(get_user))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(users)
}

/// POST /user
///
/// A body that is not a JSON object with a `username` string is treated like a missing username.
async fn create_user(
    State(users): State<UserClient>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let params = serde_json::from_slice::<UserCreate>(&body).unwrap_or_else(|e| {
        warn!(error = %e, "Unreadable user payload");
        UserCreate { username: None }
    });

    let user = users.create_user(params).await?;
    info!(user_id = %user.id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /user/:user_id
async fn get_user(
    State(users): State<UserClient>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match users.get(UserId(user_id.clone())).await? {
        Some(user) => Ok(Json(user)),
        None => {
            warn!(%user_id, "User not found");
            Err(ApiError::not_found("User not found"))
        }
    }
}
