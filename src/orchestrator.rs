//! # Order Orchestration
//!
//! [`OrderOrchestrator::create_order`] is the only place in the system where two remote
//! collaborators are coordinated:
//!
//! 1. Reject the request if `user_id` or `product_id` is missing. No call is made.
//! 2. Ask the user service whether the user exists.
//! 3. Only if it does, ask the product service whether the product exists.
//! 4. Only if both exist, append the order to the store.
//!
//! The first failure ends the request. Nothing is retried and nothing is written on a failure
//! path. Because the checks run in sequence, a user failure is reported even when the product
//! check would also have failed.
//!
//! The checks and the append are not transactional: the store trusts whatever the
//! collaborators said at the moment they were asked.

use crate::clients::OrderClient;
use crate::model::{Order, OrderCreate, OrderRequest, ProductId, UserId};
use crate::order_actor::OrderError;
use crate::upstream::{LookupError, ResourceLookup, Upstream};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Validates and places orders against the user and product collaborators.
#[derive(Clone)]
pub struct OrderOrchestrator {
    users: Arc<dyn ResourceLookup>,
    products: Arc<dyn ResourceLookup>,
    orders: OrderClient,
}

impl OrderOrchestrator {
    pub fn new(
        users: Arc<dyn ResourceLookup>,
        products: Arc<dyn ResourceLookup>,
        orders: OrderClient,
    ) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }

    /// The store orders are appended to.
    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    /// Places an order if both referenced entities exist.
    #[instrument(skip(self))]
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let (user_id, product_id) = match (request.user_id, request.product_id) {
            (Some(user_id), Some(product_id)) if !user_id.is_empty() && !product_id.is_empty() => {
                (user_id, product_id)
            }
            _ => {
                warn!("Create order failed: missing user_id or product_id");
                return Err(OrderError::ValidationError);
            }
        };

        check(self.users.as_ref(), &user_id).await?;
        check(self.products.as_ref(), &product_id).await?;

        let order = self
            .orders
            .append(OrderCreate {
                user_id: UserId(user_id),
                product_id: ProductId(product_id),
            })
            .await?;

        info!(order_id = %order.id, user_id = %order.user_id, product_id = %order.product_id, "Order created");
        Ok(order)
    }
}

/// Runs one existence check and translates its failure into the order taxonomy.
async fn check(lookup: &dyn ResourceLookup, id: &str) -> Result<(), OrderError> {
    let upstream = lookup.upstream();
    match lookup.lookup(id).await {
        Ok(()) => {
            debug!(%upstream, id, "Check OK");
            Ok(())
        }
        Err(e) => {
            warn!(%upstream, id, error = %e, "Check failed");
            Err(upstream_failure(upstream, id, e))
        }
    }
}

fn upstream_failure(upstream: Upstream, id: &str, e: LookupError) -> OrderError {
    match e {
        LookupError::NotFound => match upstream {
            Upstream::User => OrderError::UserNotFound(id.to_string()),
            Upstream::Product => OrderError::ProductNotFound(id.to_string()),
        },
        LookupError::Timeout => OrderError::UpstreamTimeout(upstream),
        LookupError::Unavailable(_) => OrderError::UpstreamUnavailable(upstream),
        LookupError::Failed(_) => OrderError::UpstreamError(upstream),
    }
}
