// Routes of the order service

use crate::api::{health, ApiError};
use crate::model::{Order, OrderRequest};
use crate::order_actor::OrderError;
use crate::orchestrator::OrderOrchestrator;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Builds the order service router.
pub fn router(orchestrator: OrderOrchestrator) -> Router {
    Router::new()
        .route("/order", post(create_order))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(orchestrator)
}

/// POST /order
///
/// An unreadable body answers exactly like a body with missing fields.
async fn create_order(
    State(orchestrator): State<OrderOrchestrator>,
    body: Bytes,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let request = serde_json::from_slice::<OrderRequest>(&body).map_err(|e| {
        warn!(error = %e, "Unreadable order payload");
        ApiError::from(OrderError::ValidationError)
    })?;

    let order = orchestrator.create_order(request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}
