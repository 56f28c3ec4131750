//! # Upstream Services
//!
//! The order service depends on two collaborators reached over HTTP: the user service and the
//! product service. This module defines the seam between the order flow and the network.
//!
//! - [`ResourceLookup`] - "does this id exist?" against one collaborator
//! - [`HttpLookup`] - the production implementation (reqwest, fixed deadline)
//! - [`MockLookup`] - scripted replies with call counting, for tests
//!
//! A lookup never retries. The first failure is classified into a [`LookupError`] and handed
//! back to the caller.

pub mod http;
pub mod mock;

pub use http::*;
pub use mock::*;

use async_trait::async_trait;
use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;

/// Deadline applied to every upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

/// The collaborators the order service calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Upstream {
    User,
    Product,
}

impl Upstream {
    /// Fixed listening port of the collaborator. Configuration only carries the host.
    pub fn port(self) -> u16 {
        match self {
            Upstream::User => 5001,
            Upstream::Product => 5002,
        }
    }

    /// First path segment of the collaborator's lookup route (`/user/{id}`, `/product/{id}`).
    pub fn resource(self) -> &'static str {
        match self {
            Upstream::User => "user",
            Upstream::Product => "product",
        }
    }

    /// Capitalized name, for messages that start with the service name.
    pub fn title(self) -> &'static str {
        match self {
            Upstream::User => "User",
            Upstream::Product => "Product",
        }
    }
}

impl Display for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.resource())
    }
}

/// How a single lookup against a collaborator failed.
///
/// The `String` payloads carry transport detail for logs only.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    /// The collaborator answered 404.
    #[error("not found")]
    NotFound,

    /// No answer before [`UPSTREAM_TIMEOUT`].
    #[error("timed out")]
    Timeout,

    /// Connection refused, DNS failure or similar connect-level error.
    #[error("unreachable: {0}")]
    Unavailable(String),

    /// Any other non-success status or transport failure.
    #[error("request failed: {0}")]
    Failed(String),
}

/// Existence check against one upstream collaborator.
#[async_trait]
pub trait ResourceLookup: Send + Sync {
    /// Which collaborator this lookup talks to.
    fn upstream(&self) -> Upstream;

    /// `Ok(())` when the collaborator confirms `id` exists.
    async fn lookup(&self, id: &str) -> Result<(), LookupError>;
}
