//! # Generic Messages
//!
//! Requests sent from a `ResourceClient` to its `ResourceActor`. Each carries a
//! oneshot sender the actor answers on.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants follow the CRUD lifecycle of a resource:
///
/// - **Create**: builds an entity from [`ActorEntity::Create`] and replies with the stored entity.
/// - **Get**: fetches one entity by id (`None` when absent).
/// - **List**: every stored entity, in creation order.
/// - **Update**: applies an [`ActorEntity::Update`] and replies with the new state.
/// - **Delete**: removes an entity unless its `on_delete` hook objects.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
