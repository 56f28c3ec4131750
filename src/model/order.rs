use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders: `ord1`, `ord2`, … in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<u32> for OrderId {
    fn from(seq: u32) -> Self {
        Self(format!("ord{}", seq))
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of an order. Orders are immutable once stored, so `Created` is the only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Created,
}

/// A placed order, as returned by `POST /order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "order_id")]
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub status: OrderStatus,
}

/// Payload for appending an order whose user and product were already confirmed.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub product_id: ProductId,
}

/// Body of `POST /order`. Both fields are optional here so that a missing field
/// can be reported with the service's own validation message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
}

impl OrderRequest {
    pub fn new(user_id: impl Into<String>, product_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            product_id: Some(product_id.into()),
        }
    }
}
