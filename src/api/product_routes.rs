// Routes of the product service

use crate::api::{health, ApiError};
use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use actor_framework::ActorClient;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Builds the product service router around a running catalog.
pub fn router(products: ProductClient) -> Router {
    Router::new()
        .route("/product/:product_id", get(get_product))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(products)
}

/// GET /product/:product_id
async fn get_product(
    State(products): State<ProductClient>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = products.get(ProductId(product_id.clone())).await.map_err(|e| {
        warn!(error = %e, "Product lookup failed");
        ApiError::internal()
    })?;

    match product {
        Some(product) => Ok(Json(product)),
        None => {
            warn!(%product_id, "Product not found");
            Err(ApiError::not_found("Product not found"))
        }
    }
}
