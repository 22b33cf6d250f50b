//! Error types for the Order actor.

use crate::catalog::MenuError;
use crate::model::ParseOrderIdError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The menu rejected the order, e.g. the drink does not exist.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// The request payload was malformed or missing a required field.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The order has been picked up and can no longer be cancelled.
    #[error("Order already picked up: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

/// A malformed order id names no order.
impl From<ParseOrderIdError> for OrderError {
    fn from(err: ParseOrderIdError) -> Self {
        OrderError::NotFound(err.0)
    }
}
