//! # Kitchen
//!
//! The kitchen hears about orders through an [`OrderObserver`](crate::model::OrderObserver):
//!
//! - [`KitchenNotifier`] is the observer. It is attached to every order and turns each
//!   notification into a [`KitchenEvent`] on an unbounded channel. It never blocks and never
//!   calls back into the order actor, which is busy notifying it.
//! - [`KitchenStation`] is a task on the other end of the channel. It looks the order up,
//!   logs what the kitchen has to do and keeps a [`KitchenTicket`] for it.
//!
//! The station holds an [`OrderClient`](crate::clients::OrderClient) and the order actor holds
//! the notifier, so neither channel closes on its own. The station stops on
//! [`KitchenEvent::Shutdown`].

pub mod notifier;
pub mod station;

pub use notifier::*;
pub use station::*;

use tokio::sync::mpsc;

/// Creates a connected notifier and station.
pub fn new(orders: crate::clients::OrderClient) -> (KitchenNotifier, KitchenStation) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (KitchenNotifier::new(sender), KitchenStation::new(receiver, orders))
}
