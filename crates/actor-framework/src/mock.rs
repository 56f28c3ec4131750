//! # Mock Framework
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of expectations instead of a running store. Use it to test the code *around* a store client
//! (error mapping, wrappers) without spawning a `ResourceActor`.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (scripted replies) | Real store and counter |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a closed channel) |
//! | **Use Case** | Client wrappers | The store itself |
//!
//! For the lowest level, [`create_mock_client`] returns the raw receiver so a test can inspect
//! each request and answer it by hand.

use crate::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Len {
        response: Result<usize, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_get(UserId::from(1)).return_ok(Some(user));
/// mock.expect_create().return_err(FrameworkError::ActorClosed);
///
/// let client = UserClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "Get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Len { respond_to }, Some(Expectation::Len { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `len` operation.
    pub fn expect_len(&mut self) -> LenExpectationBuilder<T> {
        LenExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    /// Replies with the stored record.
    pub fn return_ok(self, record: T) {
        lock(&self.expectations).push_back(Expectation::Create { response: Ok(record) });
    }

    /// Replies with an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Create { response: Err(error) });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Replies with a lookup result.
    pub fn return_ok(self, value: Option<T>) {
        lock(&self.expectations).push_back(Expectation::Get {
            id: self.id,
            response: Ok(value),
        });
    }

    /// Replies with an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Expectation::Get {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `len` expectations.
pub struct LenExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> LenExpectationBuilder<T> {
    /// Replies with a store size.
    pub fn return_ok(self, len: usize) {
        lock(&self.expectations).push_back(Expectation::Len { response: Ok(len) });
    }
}

/// Creates a client and the receiver its requests arrive on.
///
/// The test drives the "actor" side itself: receive a request, assert on it, answer through the
/// oneshot sender. Consider [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, tokio::sync::oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
