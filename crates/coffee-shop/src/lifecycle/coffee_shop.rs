use crate::catalog::{Menu, MenuError};
use crate::clients::{ActorClient, OrderClient};
use crate::config::ShopConfig;
use crate::model::{Drink, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{self, OrderError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

/// The running coffee shop: the menu plus the order actor that owns every order.
///
/// Order ids arrive as strings (`"ORD-001"`) from outside and are parsed
/// here; an id that is not in canonical form names no order and yields
/// [`OrderError::NotFound`].
///
/// # Example
///
/// ```ignore
/// let shop = CoffeeShop::new(&ShopConfig::default());
///
/// let order = shop.create_order(OrderCreate::new("1", "medium")).await?;
/// shop.update_order_status("ORD-001", OrderStatus::Ready).await?;
/// shop.cancel_order("ORD-001").await?;
///
/// shop.shutdown().await?;
/// ```
pub struct CoffeeShop {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    menu: Arc<Menu>,

    /// Order actor task, awaited on shutdown
    handle: JoinHandle<()>,
}

impl CoffeeShop {
    /// Starts a shop selling the standard menu. Must be called inside a Tokio runtime.
    pub fn new(config: &ShopConfig) -> Self {
        Self::with_menu(Menu::seeded(), config)
    }

    /// Starts a shop selling `menu`.
    pub fn with_menu(menu: Menu, config: &ShopConfig) -> Self {
        let menu = Arc::new(menu);

        // A zero-capacity mailbox cannot exist.
        let channel_capacity = config.channel_capacity.max(1);
        if channel_capacity != config.channel_capacity {
            warn!(
                configured = config.channel_capacity,
                channel_capacity, "Mailbox capacity raised"
            );
        }
        let (order_actor, order_client) = order_actor::new(channel_capacity);
        let handle = tokio::spawn(order_actor.run(menu.clone()));

        info!(drinks = menu.len(), channel_capacity, "Coffee shop open");

        Self {
            order_client: OrderClient::new(order_client),
            menu,
            handle,
        }
    }

    /// Every drink on the menu, in catalog order.
    pub fn get_menu(&self) -> Vec<Drink> {
        self.menu.list_drinks()
    }

    pub fn get_drink(&self, id: &str) -> Result<Drink, MenuError> {
        self.menu.find_drink(id)
    }

    /// Places an order. An unknown drink is rejected and leaves no trace.
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        self.order_client.create_order(params).await
    }

    /// Every order still in the shop, oldest first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.order_client.list().await
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, OrderError> {
        let id: OrderId = id.parse()?;
        self.order_client.get_order(id).await
    }

    /// Sets the order's status to `status`, whatever it was before.
    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        let id: OrderId = id.parse()?;
        self.order_client.update_status(id, status).await
    }

    /// Removes an order. Fails with [`OrderError::Conflict`] once it has been picked up.
    pub async fn cancel_order(&self, id: &str) -> Result<(), OrderError> {
        let id: OrderId = id.parse()?;
        self.order_client.cancel(id).await
    }

    /// Gracefully shuts down the shop.
    ///
    /// Drops the client, which closes the channel, then waits for the actor
    /// to finish the requests already queued. Returns an error if the actor
    /// task panicked.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down coffee shop...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Order actor task failed: {:?}", e);
            return Err(format!("Order actor task failed: {:?}", e));
        }

        info!("Coffee shop closed.");
        Ok(())
    }
}
