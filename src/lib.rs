//! # Microshop
//!
//! Three small HTTP services that together place orders:
//!
//! | Service | Port | Owns |
//! |---|---|---|
//! | user | 5001 | the user directory (`user1`, `user2`, …) |
//! | product | 5002 | a read-only product catalog |
//! | order | 5003 | the order store (`ord1`, `ord2`, …) |
//!
//! An order is accepted only after the user service confirmed the user and the product service
//! confirmed the product, in that order. See [`orchestrator`] for the flow and its failure
//! taxonomy.
//!
//! ## Module Tour
//!
//! ### 1. The Stores ([`user_actor`], [`product_actor`], [`order_actor`])
//! Each store is an [`actor_framework::ResourceActor`] owned by a single Tokio task, so the id
//! counters are never raced. [`clients`] wraps each one in a typed handle.
//!
//! ### 2. The Order Flow ([`orchestrator`], [`upstream`])
//! [`OrderOrchestrator`](orchestrator::OrderOrchestrator) validates the request and checks both
//! references through the [`ResourceLookup`](upstream::ResourceLookup) seam: HTTP in
//! production, [`MockLookup`](upstream::MockLookup) in tests.
//!
//! ### 3. The HTTP Surface ([`api`])
//! One axum router per service. Every failure becomes `{"error": "..."}`.
//!
//! ### 4. Wiring ([`config`], [`lifecycle`])
//! Environment configuration, tracing setup, and [`ServiceSystem`](lifecycle::ServiceSystem),
//! which spawns a service's stores and serves its router until shutdown.
//!
//! ## Running
//!
//! ```bash
//! microshop user
//! microshop product
//! USER_SERVICE_HOST=localhost PRODUCT_SERVICE_HOST=localhost microshop order
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod orchestrator;
pub mod order_actor;
pub mod product_actor;
pub mod upstream;
pub mod user_actor;
