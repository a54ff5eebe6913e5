//! # Generic Actor Server
//!
//! `ResourceActor` is the server half of a resource: it owns the entity store and the
//! receiving end of the request channel, and processes requests one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a keyed collection of entities.
///
/// # Concurrency Model
/// Each actor runs in its own Tokio task and handles one request at a time, so two
/// callers mutating the same entity are serialized by the loop itself. The store needs
/// no `Mutex`. Separate actors still run in parallel.
///
/// # Ordering
/// The store is an [`IndexMap`], so `List` returns entities in the order they were first
/// stored. Deletes use `shift_remove` to keep that order for the survivors.
///
/// # Usage
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Table { id: u32, seats: u32 }
/// #[derive(Debug)] struct TableCreate { id: u32, seats: u32 }
/// #[derive(Debug)] enum TableAction { AddSeat }
/// #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Create = TableCreate;
///     type Action = TableAction;
///     type ActionResult = u32;
///     type Context = ();
///     type Error = TableError;
///
///     fn id(&self) -> u32 { self.id }
///     fn from_create_params(p: TableCreate) -> Result<Self, TableError> {
///         Ok(Self { id: p.id, seats: p.seats })
///     }
///     async fn handle_action(&mut self, action: TableAction, _: &()) -> Result<u32, TableError> {
///         match action {
///             TableAction::AddSeat => { self.seats += 1; Ok(self.seats) }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Table>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let table = client.create(TableCreate { id: 7, seats: 4 }).await.unwrap();
///     let seats = client.perform_action(table.id, TableAction::AddSeat).await.unwrap();
///     assert_eq!(seats, 5);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty store, and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; once full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::with_entities(buffer_size, Vec::new())
    }

    /// Creates a new `ResourceActor` whose store is seeded with `entities`.
    ///
    /// Seeding happens before the actor runs, so it needs no runtime. Later entities
    /// replace earlier ones with the same id.
    pub fn with_entities(buffer_size: usize, entities: Vec<T>) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = entities.into_iter().map(|item| (item.id(), item)).collect();
        let actor = Self { receiver, store };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// `context` is handed to every hook, which is how an actor gets the clients or
    /// observers it depends on after they have all been constructed.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = %item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Insert { item, respond_to } => {
                    let id = item.id();
                    let inserted = match self.store.entry(id.clone()) {
                        Entry::Occupied(_) => {
                            warn!(entity_type, %id, "Insert refused, id already stored");
                            false
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(item);
                            info!(entity_type, %id, size = self.store.len(), "Inserted");
                            true
                        }
                    };
                    let _ = respond_to.send(Ok(inserted));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e))),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut item =
            T::from_create_params(params).map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.insert(item.id(), item.clone());
        Ok(item)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        self.store.shift_remove(id);
        Ok(())
    }
}
