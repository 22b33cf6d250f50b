//! Walks a few orders through the shop and prints what the shop returns.

use coffee_shop::config::ShopConfig;
use coffee_shop::lifecycle::{setup_tracing, CoffeeShop};
use coffee_shop::model::OrderStatus;
use coffee_shop::order_actor::OrderError;
use coffee_shop::payload::{decode_order_request, decode_status_request};
use tracing::{info, warn, Instrument};

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ShopConfig::load().map_err(|e| format!("Failed to load configuration: {}", e))?;
    setup_tracing(&config);

    info!(?config, "Starting coffee shop");
    let shop = CoffeeShop::new(&config);

    println!("Menu:\n{}", to_json(&shop.get_menu())?);

    // Bodies as a transport layer would receive them.
    let bodies = [
        r#"{"drink_id": "1", "size": "medium", "extras": ["oat milk", "vanilla"]}"#,
        r#"{"drink_id": "3", "size": "large"}"#,
        r#"{"drink_id": "999"}"#,
        r#"{"size": "small"}"#,
    ];

    let span = tracing::info_span!("order_intake");
    async {
        for body in bodies {
            let placed = match decode_order_request(body) {
                Ok(params) => shop.create_order(params).await,
                Err(e) => Err(e),
            };
            match placed {
                Ok(order) => println!("Placed:\n{}", to_json(&order)?),
                Err(e) => warn!(error = %e, body, "Order rejected"),
            }
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("fulfilment");
    async {
        for label in ["preparing", "ready", "picked-up"] {
            let status = decode_status_request(&format!(r#"{{"status": "{}"}}"#, label))
                .map_err(|e| e.to_string())?;
            let order = shop
                .update_order_status("ORD-001", status)
                .await
                .map_err(|e| e.to_string())?;
            info!(order_id = %order.id, status = %order.status, "Order advanced");
        }

        match shop.cancel_order("ORD-001").await {
            Err(OrderError::Conflict(id)) => info!(order_id = %id, "Picked-up order kept"),
            other => warn!(?other, "Picked-up order should not be cancellable"),
        }

        shop.update_order_status("ORD-002", OrderStatus::Preparing)
            .await
            .map_err(|e| e.to_string())?;
        shop.cancel_order("ORD-002").await.map_err(|e| e.to_string())?;
        info!(order_id = "ORD-002", "Order cancelled");
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let orders = shop.list_orders().await.map_err(|e| e.to_string())?;
    println!("Orders:\n{}", to_json(&orders)?);

    shop.shutdown().await?;

    info!("Coffee shop demo completed");
    Ok(())
}
