//! # Resource Actor
//!
//! Building blocks for in-process, actor-backed entity stores.
//!
//! A store for one kind of entity is a single Tokio task, the [`ResourceActor`]. It owns a
//! keyed map of entities and processes [`ResourceRequest`]s one at a time. Callers hold a
//! cheap, cloneable [`ResourceClient`] and never touch the map directly, so every mutation
//! of an entity is serialized without locks.
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the domain type, its creation payload, its custom
//!    actions and its lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]): the message loop and the store.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed request/response calls.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to the constructor. All
//! actors and clients can be created first and wired afterwards, which breaks construction
//! cycles between stores that need each other.
//!
//! ## Store Semantics
//!
//! - Entities carry their own ids ([`ActorEntity::id`]); the actor never invents them.
//! - Reads return clones, so a caller's snapshot never changes under it.
//! - Listing is in insertion order.
//! - Stored entities change only through actions; `Insert` never replaces an existing entry.
//! - A missing id is `Ok(None)` for reads and [`FrameworkError::NotFound`] for actions and deletes.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations, for testing
//! code that sits on top of a client without running the real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
