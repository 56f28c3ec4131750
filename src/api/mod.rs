//! # HTTP Surface
//!
//! One axum [`Router`](axum::Router) per service. Handlers own a cloned store client or the
//! [`OrderOrchestrator`](crate::orchestrator::OrderOrchestrator) through axum state; every error
//! leaves as `{"error": "..."}` via [`ApiError`].
//!
//! | Service | Routes |
//! |---|---|
//! | user | `POST /user`, `GET /user/:user_id`, `GET /health` |
//! | product | `GET /product/:product_id`, `GET /health` |
//! | order | `POST /order`, `GET /health` |

pub mod order_routes;
pub mod product_routes;
pub mod responses;
pub mod user_routes;

pub use responses::{ApiError, ErrorResponse, HealthResponse};

use axum::Json;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}
