//! # Mock Lookup
//!
//! A [`ResourceLookup`] answered from a queue of expectations, for testing the order flow
//! without any HTTP server.
//!
//! Every call is recorded, so tests can assert not only *what* was answered but also *whether*
//! a collaborator was contacted at all (for example: a request with a missing field must not
//! reach either service).
//!
//! ```rust
//! use microshop::upstream::{LookupError, MockLookup, ResourceLookup, Upstream};
//!
//! #[tokio::main]
//! async fn main() {
//!     let users = MockLookup::new(Upstream::User);
//!     users.expect_lookup("user1").return_found();
//!     users.expect_lookup("userX").return_err(LookupError::NotFound);
//!
//!     assert!(users.lookup("user1").await.is_ok());
//!     assert_eq!(users.lookup("userX").await, Err(LookupError::NotFound));
//!
//!     assert_eq!(users.call_count(), 2);
//!     users.verify();
//! }
//! ```

use super::{LookupError, ResourceLookup, Upstream};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

struct Expectation {
    id: String,
    response: Result<(), LookupError>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scripted [`ResourceLookup`] with call recording.
pub struct MockLookup {
    upstream: Upstream,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockLookup {
    /// Creates a mock with no expectations. Any call before one is scripted panics.
    pub fn new(upstream: Upstream) -> Self {
        Self {
            upstream,
            expectations: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Expects a lookup of `id`. Expectations are consumed in the order they were added.
    pub fn expect_lookup(&self, id: impl Into<String>) -> LookupExpectationBuilder {
        LookupExpectationBuilder {
            id: id.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Number of lookups received so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// The ids looked up so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!(
                "Not all {} lookups were made. {} remaining",
                self.upstream, remaining
            );
        }
    }
}

#[async_trait]
impl ResourceLookup for MockLookup {
    fn upstream(&self) -> Upstream {
        self.upstream
    }

    async fn lookup(&self, id: &str) -> Result<(), LookupError> {
        lock(&self.calls).push(id.to_string());

        let expectation = lock(&self.expectations).pop_front();
        match expectation {
            Some(expectation) => {
                assert_eq!(
                    expectation.id, id,
                    "{} lookup called with unexpected id",
                    self.upstream
                );
                expectation.response
            }
            None => panic!("Unexpected {} lookup for '{}'", self.upstream, id),
        }
    }
}

/// Builder for lookup expectations.
pub struct LookupExpectationBuilder {
    id: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LookupExpectationBuilder {
    /// The collaborator confirms the id exists.
    pub fn return_found(self) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            response: Ok(()),
        });
    }

    /// The lookup fails with `error`.
    pub fn return_err(self, error: LookupError) {
        lock(&self.expectations).push_back(Expectation {
            id: self.id,
            response: Err(error),
        });
    }
}
