//! Error types for the menu catalog.

use thiserror::Error;

/// Errors that can occur while building or querying the menu.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// No drink on the menu has this id.
    #[error("Drink not found: {0}")]
    DrinkNotFound(String),

    /// Two drinks were given the same id.
    #[error("Duplicate drink id: {0}")]
    DuplicateDrink(String),
}
