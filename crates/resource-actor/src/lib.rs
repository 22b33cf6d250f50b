//! # Resource Actor
//!
//! Building blocks for keeping a collection of stateful entities behind a
//! single Tokio task. A **Resource-Oriented** CRUD surface (create, get, list,
//! update, delete) sits on top of the **Actor Model**: one task owns the
//! state, everybody else sends it messages.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain type plus its lifecycle hooks.
//! 2. **Runtime** ([`ResourceActor`]): the message loop that owns an [`EntityStore`].
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed, cloneable handles.
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Tab { id: u32, owner: String, settled: bool }
//!
//! #[derive(Debug)] struct TabCreate { owner: String }
//! #[derive(Debug)] struct TabUpdate { settled: bool }
//! #[derive(Debug)] struct TabError(String);
//!
//! impl std::fmt::Display for TabError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
//! }
//! impl std::error::Error for TabError {}
//!
//! #[async_trait]
//! impl ActorEntity for Tab {
//!     type Id = u32;
//!     type Create = TabCreate;
//!     type Update = TabUpdate;
//!     type Context = ();
//!     type Error = TabError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: TabCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, owner: params.owner, settled: false })
//!     }
//!
//!     async fn on_update(&mut self, update: TabUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.settled = update.settled;
//!         Ok(())
//!     }
//!
//!     async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
//!         if self.settled { Ok(()) } else { Err(TabError(format!("tab {} is open", self.id))) }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Tab>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let tab = client.create(TabCreate { owner: "Ada".into() }).await.unwrap();
//!     assert_eq!(tab.id, 1);
//!
//!     // The delete hook vetoes removal of an open tab.
//!     assert!(client.delete(tab.id).await.is_err());
//!
//!     client.update(tab.id, TabUpdate { settled: true }).await.unwrap();
//!     client.delete(tab.id).await.unwrap();
//!     assert!(client.list().await.unwrap().is_empty());
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies reach the hooks through `run(context)` instead of `new()`.
//! Actors can therefore all be constructed first and wired afterwards.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Requests are handled **sequentially**, so multi-step operations such as
//!   "allocate id then append" or "find then mutate" never interleave.
//! - The actor exits once every client has been dropped.
//!
//! ## Testing
//!
//! See [`mock`] for scripted clients that need no running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
