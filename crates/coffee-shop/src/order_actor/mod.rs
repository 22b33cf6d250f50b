//! # Order Actor
//!
//! Owns every order in the shop. The actor keeps orders in creation order,
//! mints `ORD-NNN` ids from a counter that only advances when an order is
//! actually stored, and serializes all reads and writes through its mailbox.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use coffee_shop::catalog::Menu;
//! use coffee_shop::clients::OrderClient;
//! use coffee_shop::model::OrderCreate;
//! use coffee_shop::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(32);
//!     let client = OrderClient::new(generic_client);
//!
//!     // The menu is the actor's only dependency.
//!     tokio::spawn(actor.run(Arc::new(Menu::seeded())));
//!
//!     let order = client.create_order(OrderCreate::new("1", "medium")).await?;
//!     assert_eq!(order.id.to_string(), "ORD-001");
//!     assert_eq!(order.total_price, 2.50);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
