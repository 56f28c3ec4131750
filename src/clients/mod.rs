//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient), one per store.

pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use order_client::*;
pub use product_client::*;
pub use user_client::*;
