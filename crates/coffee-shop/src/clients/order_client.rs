//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and turns runtime failures back into
//! [`OrderError`]s.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Drink lookup and pricing happen in the Order actor's `on_create` hook and
/// the pickup check in `on_delete`; this client only forwards requests.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored, id and price included.
    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending create_order to actor");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total_price = order.total_price, "Order placed");
        Ok(order)
    }

    /// Fetches one order, treating absence as [`OrderError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Replaces an order's status.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self
            .inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %order.id, status = %order.status, "Status updated");
        Ok(order)
    }

    /// Removes an order unless it has been picked up.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await?;
        info!(order_id = %id, "Order cancelled");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MenuError;
    use resource_actor::mock::{
        create_mock_client, expect_create, expect_delete, expect_get, expect_update, MockClient,
    };

    fn priced_order(id: u32) -> Order {
        let mut order = Order::new(OrderId(id), OrderCreate::new("3", "large"));
        order.drink_name = "Latte".to_string();
        order.total_price = 4.50;
        order
    }

    #[tokio::test]
    async fn test_create_order_forwards_params() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task = tokio::spawn(async move {
            order_client
                .create_order(OrderCreate::new("3", "large").with_extras(["oat milk"]))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.drink_id, "3");
        assert_eq!(params.size, "large");
        assert_eq!(params.extras, vec!["oat milk".to_string()]);

        responder.send(Ok(priced_order(1))).unwrap();

        let order = create_task.await.unwrap().unwrap();
        assert_eq!(order.id, OrderId(1));
        assert_eq!(order.drink_name, "Latte");
    }

    #[tokio::test]
    async fn test_create_order_recovers_menu_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task =
            tokio::spawn(async move { order_client.create_order(OrderCreate::new("99", "")).await });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        let rejection = OrderError::from(MenuError::DrinkNotFound("99".to_string()));
        responder.send(Err(FrameworkError::entity(rejection))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(
            result.unwrap_err(),
            OrderError::Menu(MenuError::DrinkNotFound("99".to_string()))
        );
    }

    #[tokio::test]
    async fn test_get_order_missing_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let get_task = tokio::spawn(async move { order_client.get_order(OrderId(7)).await });

        let (id, responder) = expect_get(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(7));
        responder.send(Ok(None)).unwrap();

        let result = get_task.await.unwrap();
        assert_eq!(result.unwrap_err(), OrderError::NotFound("ORD-007".to_string()));
    }

    #[tokio::test]
    async fn test_update_status_sends_only_status() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let update_task = tokio::spawn(async move {
            order_client
                .update_status(OrderId(1), OrderStatus::Ready)
                .await
        });

        let (id, update, responder) = expect_update(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(1));
        assert_eq!(update.status, OrderStatus::Ready);

        let mut order = priced_order(1);
        order.status = update.status;
        responder.send(Ok(order)).unwrap();

        let order = update_task.await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
    }

    #[tokio::test]
    async fn test_cancel_picked_up_is_conflict() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let cancel_task = tokio::spawn(async move { order_client.cancel(OrderId(2)).await });

        let (id, responder) = expect_delete(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(2));
        responder
            .send(Err(FrameworkError::entity(OrderError::Conflict(
                "ORD-002".to_string(),
            ))))
            .unwrap();

        let result = cancel_task.await.unwrap();
        assert_eq!(result.unwrap_err(), OrderError::Conflict("ORD-002".to_string()));
    }

    #[tokio::test]
    async fn test_runtime_errors_map_to_communication_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        mock.expect_delete(OrderId(3))
            .return_err(FrameworkError::NotFound("ORD-003".to_string()));

        let order_client = OrderClient::new(mock.client());

        let err = order_client.list().await.unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));

        let err = order_client.cancel(OrderId(3)).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound("ORD-003".to_string()));

        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client::<Order>(10);
        drop(receiver);
        let order_client = OrderClient::new(client);

        let err = order_client.get_order(OrderId(1)).await.unwrap_err();
        assert_eq!(
            err,
            OrderError::ActorCommunicationError("Actor closed".to_string())
        );
    }
}
