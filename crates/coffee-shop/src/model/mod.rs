//! Pure data structures: menu drinks, orders and their payloads.

pub mod drink;
pub mod order;

pub use drink::*;
pub use order::*;
