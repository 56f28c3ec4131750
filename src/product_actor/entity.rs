//! [`ActorEntity`] implementation for [`Product`].

use super::ProductError;
use crate::model::{Product, ProductId};
use actor_framework::ActorEntity;
use std::convert::Infallible;

impl ActorEntity for Product {
    type Id = ProductId;
    // The catalog is seeded, never extended at runtime.
    type Create = Infallible;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(_id: ProductId, params: Infallible) -> Result<Self, ProductError> {
        match params {}
    }
}
