//! # Shop Lifecycle
//!
//! Starts, wires and stops the shop.
//!
//! [`CoffeeShop`] builds the order actor, hands it the shared [`Menu`](crate::catalog::Menu)
//! as its context and keeps the task handle for shutdown. [`setup_tracing`]
//! configures logging for the binary.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor drains** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Await completion** - `shutdown` waits for the actor task and reports a panic
//!
//! Clones of the [`OrderClient`](crate::clients::OrderClient) handed out
//! earlier keep the actor alive until they are dropped as well.

pub mod coffee_shop;
pub mod tracing;

pub use self::coffee_shop::*;
pub use self::tracing::setup_tracing;
