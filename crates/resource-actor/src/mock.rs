//! # Mock Clients
//!
//! Test doubles that speak the same channel protocol as a real [`ResourceActor`](crate::ResourceActor),
//! so code built on a [`ResourceClient`] can be tested without spawning the real actor.
//!
//! | | `MockClient` | Real actor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real store |
//! | **Determinism** | Fully scripted | Scheduler-dependent |
//! | **Error injection** | `return_err(...)` | Needs a real failing state |
//!
//! ## Scripted expectations
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Table { id: u32 }
//! #[derive(Debug)] struct TableCreate;
//! #[derive(Debug)] enum TableAction {}
//! #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32; type Create = TableCreate; type Action = TableAction;
//!     type ActionResult = (); type Context = (); type Error = TableError;
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(_: TableCreate) -> Result<Self, TableError> { Ok(Self { id: 1 }) }
//!     async fn handle_action(&mut self, a: TableAction, _: &()) -> Result<(), TableError> {
//!         match a {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Table>::new();
//!     mock.expect_get(3).return_ok(Some(Table { id: 3 }));
//!     mock.expect_get(4).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(3).await.unwrap().unwrap().id, 3);
//!     assert!(matches!(client.get(4).await, Err(FrameworkError::ActorClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! ## Raw channel helpers
//!
//! [`create_mock_client`] hands back the receiving end of the channel instead. The test then
//! pulls requests with [`expect_get`] / [`expect_action`], asserts on their contents and
//! answers through the responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// One scripted answer, consumed in FIFO order.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("Get({id})"),
            Expectation::List { .. } => "List".to_string(),
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::Action { id, .. } => format!("Action({id})"),
        }
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered in the order the expectations were registered. A request of
/// the wrong kind, or for a different id, fails the test with a panic in the mock task,
/// and the caller sees `FrameworkError::ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let pending = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let next = pending.lock().unwrap().pop_front();
                answer(request, next);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> Respond<T, Option<T>> {
        Respond::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> Respond<T, Vec<T>> {
        Respond::new(self.expectations.clone(), |response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> Respond<T, T> {
        Respond::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Respond<T, T::ActionResult> {
        Respond::new(self.expectations.clone(), move |response| Expectation::Action {
            id,
            response,
        })
    }

    /// Panics if any registered expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            let names: Vec<String> = remaining.iter().map(Expectation::describe).collect();
            panic!(
                "Not all expectations were met. {} remaining: {}",
                names.len(),
                names.join(", ")
            );
        }
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
        let _ = respond_to.send(response);
    }

    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            assert_eq!(id, want, "Get for unexpected id");
            reply(respond_to, response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            reply(respond_to, response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            reply(respond_to, response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            assert_eq!(id, want, "Action for unexpected id");
            reply(respond_to, response);
        }
        (_, Some(other)) => panic!("Unexpected request, expected {}", other.describe()),
        (_, None) => panic!("Unexpected request, no expectations left"),
    }
}

/// Builder that completes an expectation with its scripted answer.
pub struct Respond<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> Respond<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Answer the request successfully with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Answer the request with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client plus the raw receiver its requests arrive on.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Pulls the next request, if it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pulls the next request, if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Table {
        id: u32,
        seats: u32,
    }

    #[derive(Debug)]
    struct TableCreate {
        seats: u32,
    }

    #[derive(Debug)]
    enum TableAction {
        Seat(u32),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Table error")]
    struct TableError;

    #[async_trait]
    impl ActorEntity for Table {
        type Id = u32;
        type Create = TableCreate;
        type Action = TableAction;
        type ActionResult = u32;
        type Context = ();
        type Error = TableError;

        fn id(&self) -> u32 {
            self.id
        }

        fn from_create_params(params: TableCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id: 1,
                seats: params.seats,
            })
        }

        async fn handle_action(
            &mut self,
            action: TableAction,
            _ctx: &Self::Context,
        ) -> Result<u32, Self::Error> {
            match action {
                TableAction::Seat(n) => Ok(n),
            }
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_action() {
        let (client, mut receiver) = create_mock_client::<Table>(10);

        let task = tokio::spawn(async move { client.perform_action(9, TableAction::Seat(2)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 9);
        assert!(matches!(action, TableAction::Seat(2)));
        responder.send(Ok(2)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_create().return_ok(Table { id: 1, seats: 4 });
        mock.expect_list().return_ok(vec![Table { id: 1, seats: 4 }]);
        mock.expect_action(1).return_err(FrameworkError::NotFound("1".into()));

        let client = mock.client();
        let created = client.create(TableCreate { seats: 4 }).await.unwrap();
        assert_eq!(created.seats, 4);
        assert_eq!(client.list().await.unwrap().len(), 1);

        let err = client.perform_action(1, TableAction::Seat(1)).await.unwrap_err();
        assert!(err.is_not_found());

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mut mock = MockClient::<Table>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
