use serde::{Deserialize, Serialize};

/// Which part of the menu a drink is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coffee,
    Tea,
    Cold,
}

/// A menu entry.
///
/// Drinks are seeded once when the [`Menu`](crate::catalog::Menu) is built
/// and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub base_price: f64,
}

impl Drink {
    /// Creates a new Drink.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier, unique within a menu
    /// * `name` - Display name
    /// * `category` - Menu section
    /// * `base_price` - Price of a small drink with no extras
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        base_price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            base_price,
        }
    }
}
