//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (a customer, the menu,
//! an order, …) implements so a generic [`ResourceActor`](crate::ResourceActor) can own it.
//! It fixes the associated types for the identifier, the creation payload, the custom
//! actions and their results, the injected context and the error type, and it provides
//! the lifecycle hooks the actor calls around each request.
//!
//! # Identity
//! Entities mint their own identifiers (typically a UUID assigned at construction), so the
//! actor never generates ids. It asks the entity for [`ActorEntity::id`] when storing it.
//! This lets already-built entities be inserted as-is under a fresh id (see
//! [`ResourceClient::insert`](crate::ResourceClient::insert)).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await (e.g. call other actors). Every hook
/// receives the `Context` passed to [`ResourceActor::run`](crate::ResourceActor::run),
/// which is how dependencies are bound late, after all actors exist.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g. `AddDish`, `UpdateStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum per actor, shared by all its actions.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier the actor stores this entity under.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from its creation payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    /// A failure here aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action against the stored entity.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
