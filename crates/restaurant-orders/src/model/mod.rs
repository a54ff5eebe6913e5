//! Domain types: dishes, the menu, customers, orders and the observer contracts.

pub mod customer;
pub mod dish;
pub mod error;
pub mod factory;
pub mod id;
pub mod menu;
pub mod observer;
pub mod order;
pub mod price;

pub use customer::*;
pub use dish::*;
pub use error::*;
pub use factory::*;
pub use id::*;
pub use menu::*;
pub use observer::*;
pub use order::*;
pub use price::*;
