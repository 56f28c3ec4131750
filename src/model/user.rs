use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
///
/// Allocated ids render as `user1`, `user2`, …; ids arriving from the network are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<u32> for UserId {
    fn from(seq: u32) -> Self {
        Self(format!("user{}", seq))
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a registered user in the directory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be stored by a [`ResourceActor`](actor_framework::ResourceActor).
/// Serializes as the user-service wire record `{"user_id", "username"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "user_id")]
    pub id: UserId,
    pub username: String,
}

/// Payload for registering a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    #[serde(default)]
    pub username: Option<String>,
}

impl UserCreate {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
        }
    }
}
