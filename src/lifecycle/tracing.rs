//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Call it once, from `main`.
//!
//! The format is compact and hides the module prefix (`with_target(false)`): store actors
//! already tag their events with `entity_type`, and request spans from the HTTP layer show the
//! method and path.
//!
//! ```bash
//! # Default: info
//! microshop order
//!
//! # Upstream URLs and store payloads
//! RUST_LOG=debug microshop order
//!
//! # Only the HTTP layer
//! RUST_LOG=tower_http=debug microshop user
//! ```
//!
//! A successful order at `info` reads roughly:
//!
//! ```text
//! INFO Calling upstream service upstream=user url=http://user-service:5001/user/user1
//! INFO Upstream check OK upstream=user id="user1"
//! INFO Calling upstream service upstream=product url=http://product-service:5002/product/prod123
//! INFO Upstream check OK upstream=product id="prod123"
//! INFO Created entity_type="Order" id=ord1 size=1
//! INFO Order created order_id=ord1 user_id=user1 product_id=prod123
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
