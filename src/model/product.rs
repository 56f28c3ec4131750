use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl From<u32> for ProductId {
    fn from(seq: u32) -> Self {
        Self(format!("prod{}", seq))
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a product in the catalog.
///
/// The catalog is seeded at startup and never mutated, so the id is not part of the
/// wire record: `GET /product/{id}` answers with `{"name", "price"}` only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    #[serde(skip)]
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Catalog key (e.g. `prod123`)
    /// * `name` - Product name
    /// * `price` - Unit price
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: ProductId(id.into()),
            name: name.into(),
            price,
        }
    }
}
