//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the restaurant's actors.
//!
//! ## The OrderSystem Pattern
//!
//! [`OrderSystem::new`] creates every actor first and only then starts them, handing each its
//! dependencies through `run(context)`:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(config.channel_buffer);
//! let (notifier, station) = kitchen::new(order_client.clone());
//! let kitchen = Arc::new(notifier);
//! tokio::spawn(order_actor.run(vec![kitchen.clone() as SharedObserver]));
//! tokio::spawn(station.run());
//! ```
//!
//! The order actor depends on the kitchen (it notifies it) and the kitchen depends on the
//! order actor (it reads orders back). Late binding through the context is what lets both
//! exist at all.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the kitchen** - the dependency cycle means its channel never closes on its own,
//!    so it gets an explicit `Shutdown` event and drops its order client when it exits.
//! 2. **Drop all clients** - closes the actors' request channels.
//! 3. **Await completion** - each actor drains its queue, logs `Shutdown` and exits.
//!
//! ## Configuration
//!
//! [`SystemConfig::from_env`] reads `RESTAURANT_CHANNEL_BUFFER` and `RESTAURANT_SAMPLE_DATA`.
//! Logging is set up separately with
//! [`resource_actor::tracing::setup_tracing`], filtered by `RUST_LOG`.

pub mod config;
pub mod order_system;
pub mod sample_data;

pub use config::*;
pub use order_system::*;
