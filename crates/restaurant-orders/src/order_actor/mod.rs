//! # Order Actor
//!
//! Owns every [`Order`]. Each order mutation is an action on this actor, so the status
//! check for adding or removing a dish, the change itself and the notify round that
//! follows a status change all happen in one step, with no other caller in between.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - creates the actor and its client
//!
//! ## Context
//!
//! The actor's context is the list of default observers. Every order created through the
//! actor gets them attached and receives one initial notify round:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! tokio::spawn(order_actor.run(vec![kitchen.clone() as SharedObserver]));
//! ```
//!
//! Orders stored with [`insert`](resource_actor::ResourceClient::insert) keep whatever
//! observers they already carry. Insert only takes ids that are not stored yet; a stored
//! order changes through its actions alone.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
