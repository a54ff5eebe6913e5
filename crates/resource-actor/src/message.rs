//! # Generic Messages
//!
//! The request envelope exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request sent to a resource actor.
///
/// The variants cover the repository surface of a keyed store plus a typed
/// extension point:
///
/// - **Create**: build a new entity from [`ActorEntity::Create`], run `on_create`, store it,
///   and answer with a snapshot of what was stored.
/// - **Insert**: store an entity that was built elsewhere (no hooks run). An id that is
///   already stored is left alone, so a stale snapshot can never overwrite changes made
///   through actions. Answers whether the entity was stored.
/// - **Get**: snapshot of one entity, or `None`.
/// - **List**: snapshots of every entity, in insertion order.
/// - **Delete**: run `on_delete`, then remove.
/// - **Action**: run a custom [`ActorEntity::Action`] against one entity.
///
/// All mutation of a stored entity goes through this enum, so the actor's sequential loop
/// is the only writer.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Insert {
        item: T,
        respond_to: Response<bool>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
