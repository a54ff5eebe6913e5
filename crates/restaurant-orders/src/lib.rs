//! # Restaurant Orders
//!
//! Order lifecycle management for a restaurant, built on [`resource_actor`].
//!
//! - **[model]**: dishes, the menu, customers, orders, the observer contracts and the
//!   per-type order factories.
//! - **[customer_actor]**, **[menu_actor]**, **[order_actor]**: the entity stores.
//! - **[clients]**: typed wrappers ([`OrderClient`](clients::OrderClient), ...) over the actors.
//! - **[kitchen]**: the observer that turns order notifications into kitchen tickets.
//! - **[lifecycle]**: configuration, startup wiring, sample data and shutdown.

pub mod clients;
pub mod customer_actor;
pub mod kitchen;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
