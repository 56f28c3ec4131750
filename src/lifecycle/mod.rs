//! # Lifecycle
//!
//! Process-level wiring: tracing setup, building a service's stores and router, serving it and
//! shutting it down.

pub mod services;
pub mod tracing;

pub use self::services::{shutdown_signal, Service, ServiceError, ServiceSystem};
pub use self::tracing::setup_tracing;
