//! # Menu Catalog
//!
//! The fixed list of drinks the shop sells. A [`Menu`] is built once at
//! startup, shared behind an `Arc`, and only ever read. Lookups hand back
//! owned copies so callers never hold a borrow into the shared list.

pub mod error;

pub use error::*;

use crate::model::{Category, Drink};

/// Read-only, ordered drink catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    drinks: Vec<Drink>,
}

impl Menu {
    /// Builds a menu from `drinks`, keeping their order.
    ///
    /// Returns [`MenuError::DuplicateDrink`] if two drinks share an id.
    pub fn new(drinks: Vec<Drink>) -> Result<Self, MenuError> {
        for (index, drink) in drinks.iter().enumerate() {
            if drinks[..index].iter().any(|earlier| earlier.id == drink.id) {
                return Err(MenuError::DuplicateDrink(drink.id.clone()));
            }
        }
        Ok(Self { drinks })
    }

    /// The shop's standard seven-drink menu.
    pub fn seeded() -> Self {
        Self {
            drinks: vec![
                Drink::new("1", "Espresso", Category::Coffee, 2.00),
                Drink::new("2", "Cappuccino", Category::Coffee, 3.00),
                Drink::new("3", "Latte", Category::Coffee, 3.50),
                Drink::new("4", "Green Tea", Category::Tea, 2.50),
                Drink::new("5", "Matcha Latte", Category::Tea, 4.00),
                Drink::new("6", "Iced Coffee", Category::Cold, 3.00),
                Drink::new("7", "Iced Latte", Category::Cold, 3.50),
            ],
        }
    }

    /// Every drink, in catalog order.
    pub fn list_drinks(&self) -> Vec<Drink> {
        self.drinks.clone()
    }

    /// A copy of the drink with `id`.
    pub fn find_drink(&self, id: &str) -> Result<Drink, MenuError> {
        self.drinks
            .iter()
            .find(|drink| drink.id == id)
            .cloned()
            .ok_or_else(|| MenuError::DrinkNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::seeded()
    }
}
