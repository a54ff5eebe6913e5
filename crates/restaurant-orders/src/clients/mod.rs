//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client hides the request/response enums of its actor behind plain async methods,
//! and maps framework errors into the actor's own error type. Entity errors raised inside
//! an actor come back as themselves (a `MenuError::ValidationError` stays one).

pub mod customer_client;
pub mod menu_client;
pub mod order_client;

pub use customer_client::*;
pub use menu_client::*;
pub use order_client::*;
