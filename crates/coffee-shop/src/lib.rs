//! # Coffee Shop
//!
//! An in-memory order service for a coffee shop: a fixed drink menu, a
//! pricing rule, and an order store with a simple pickup lifecycle.
//!
//! - **[catalog]**: the read-only [`Menu`](catalog::Menu) of drinks.
//! - **[pricing]**: base price plus size surcharge plus a flat fee per extra.
//! - **[model]**: [`Drink`](model::Drink), [`Order`](model::Order) and their ids and statuses.
//! - **[order_actor]**: the entity hooks that price, update and guard orders.
//! - **[clients]**: [`OrderClient`](clients::OrderClient), the typed handle to the order actor.
//! - **[lifecycle]**: [`CoffeeShop`](lifecycle::CoffeeShop), which wires everything together.
//! - **[payload]**: JSON request body decoding for a transport layer.
//! - **[config]**: runtime settings.

pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod payload;
pub mod pricing;
