//! # Customer Actor
//!
//! The customer directory. Customers are plain values with no custom actions, so this
//! actor only uses the store surface of [`ResourceActor`]: create, get, list, delete.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`new()`] - creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_orders::customer_actor;
//! use restaurant_orders::clients::CustomerClient;
//! use restaurant_orders::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = customer_actor::new(32);
//!     let client = CustomerClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let customer = client
//!         .create_customer(CustomerCreate {
//!             name: "John Doe".to_string(),
//!             email: "john@example.com".to_string(),
//!             phone: None,
//!             address: None,
//!         })
//!         .await?;
//!     assert_eq!(customer.name, "John Doe");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::model::Customer;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(buffer_size)
}
