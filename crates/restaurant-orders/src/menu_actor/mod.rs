//! # Menu Actor
//!
//! The whole menu is a single [`Menu`] entity held by one actor, so every menu read or
//! write (add, remove, lookup, resolving a list of ids for a new order) is one atomic step.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Menu`]
//! - [`error`] - [`MenuError`]
//! - [`actions`] - [`MenuAction`] and [`MenuActionResult`]
//! - [`new()`] - creates the actor, already holding an empty menu
//!
//! ## Custom Actions
//!
//! ```rust,ignore
//! let dish = menu_client.add_dish(params).await?;
//! let starters = menu_client.dishes_by_category("Appetizer").await?;
//! let resolved = menu_client.resolve_dishes(vec![dish.id()]).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{Menu, MenuId};
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a Menu actor seeded with one empty menu called `name`.
///
/// Returns the id of that menu alongside the actor and client.
pub fn new(
    buffer_size: usize,
    name: impl Into<String>,
) -> (ResourceActor<Menu>, ResourceClient<Menu>, MenuId) {
    let menu = Menu::new(name);
    let menu_id = menu.id();
    let (actor, client) = ResourceActor::with_entities(buffer_size, vec![menu]);
    (actor, client, menu_id)
}
