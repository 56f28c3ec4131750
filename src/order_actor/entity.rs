//! [`ActorEntity`] implementation for [`Order`].

use super::OrderError;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus};
use actor_framework::ActorEntity;

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            user_id: params.user_id,
            product_id: params.product_id,
            status: OrderStatus::Created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_serializes_as_wire_record() {
        let order = Order::from_create_params(
            OrderId::from(1),
            OrderCreate {
                user_id: "user1".into(),
                product_id: "prod123".into(),
            },
        )
        .unwrap();

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "order_id": "ord1",
                "user_id": "user1",
                "product_id": "prod123",
                "status": "created"
            })
        );
    }
}
