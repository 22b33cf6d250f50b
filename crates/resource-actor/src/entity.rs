//! # ActorEntity Trait
//!
//! The contract a resource type implements to be managed by [`ResourceActor`](crate::ResourceActor).
//! Associated types pin down the id, the creation and update payloads, the
//! injected runtime context and the error type, so a payload meant for one
//! resource can never be sent to another.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Returning an error from either hook aborts the
//! operation and leaves the store untouched.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other actors. The `Context`
/// is handed to `run()` rather than `new()`, which lets dependencies be wired
/// after every actor has been constructed.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the store's sequence counter, which starts at 1.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type returned by the hooks.
    ///
    /// One enum per actor rather than one per operation: clients match on a
    /// single type, at the price of every hook sharing the same variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id this entity was created with.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the id and payload.
    /// Called before `on_create`; the id is only consumed if both succeed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    /// Use this hook to validate against, or enrich from, the context.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received for this entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error vetoes the removal.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
