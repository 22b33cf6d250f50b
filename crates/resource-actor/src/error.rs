//! # Runtime Errors
//!
//! Errors raised by the actor runtime itself. Failures coming from an entity's
//! own hooks travel inside [`FrameworkError::EntityError`] so that typed clients
//! can downcast them back to the entity's error type.

/// Errors that can occur while talking to a `ResourceActor`.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity hook failure.
    pub fn entity<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }
}
