//! ActorEntity trait implementation for the Order domain type.
//!
//! The order actor's context is the shared [`Menu`]: placing an order
//! resolves the drink, copies its name and prices the order before the order
//! is stored.

use crate::catalog::Menu;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use crate::pricing::compute_price;
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::sync::Arc;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = Arc<Menu>;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Order::new(id, params))
    }

    /// Resolves the drink and freezes the price.
    ///
    /// Fails with [`MenuError::DrinkNotFound`](crate::catalog::MenuError::DrinkNotFound)
    /// when the drink is not on the menu; the order is then never stored.
    async fn on_create(&mut self, menu: &Arc<Menu>) -> Result<(), OrderError> {
        let drink = menu.find_drink(&self.drink_id)?;
        self.total_price = compute_price(drink.base_price, &self.size, self.extras.len());
        self.drink_name = drink.name;
        debug!(order_id = %self.id, total_price = self.total_price, "Order priced");
        Ok(())
    }

    /// Replaces the status and nothing else. Any status may follow any other.
    ///
    /// The label is re-read so that `Other("picked-up")` is stored as
    /// `PickedUp` and guarded like it.
    async fn on_update(&mut self, update: OrderUpdate, _menu: &Arc<Menu>) -> Result<(), OrderError> {
        self.status = OrderStatus::from(update.status.as_str());
        Ok(())
    }

    /// Picked-up orders are permanent.
    async fn on_delete(&self, _menu: &Arc<Menu>) -> Result<(), OrderError> {
        if self.status == OrderStatus::PickedUp {
            return Err(OrderError::Conflict(self.id.to_string()));
        }
        Ok(())
    }
}
