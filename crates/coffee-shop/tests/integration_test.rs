use coffee_shop::catalog::MenuError;
use coffee_shop::config::ShopConfig;
use coffee_shop::lifecycle::CoffeeShop;
use coffee_shop::model::{Category, OrderCreate, OrderId, OrderStatus};
use coffee_shop::order_actor::OrderError;
use coffee_shop::payload::{decode_order_request, decode_status_request};
use std::collections::HashSet;
use std::sync::Arc;

fn open_shop() -> CoffeeShop {
    CoffeeShop::new(&ShopConfig::default())
}

#[tokio::test]
async fn test_menu_is_seeded() {
    let shop = open_shop();

    let menu = shop.get_menu();
    let names: Vec<&str> = menu.iter().map(|drink| drink.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Espresso",
            "Cappuccino",
            "Latte",
            "Green Tea",
            "Matcha Latte",
            "Iced Coffee",
            "Iced Latte"
        ]
    );

    let latte = shop.get_drink("3").unwrap();
    assert_eq!(latte.category, Category::Coffee);
    assert_eq!(latte.base_price, 3.50);

    assert_eq!(
        shop.get_drink("42").unwrap_err(),
        MenuError::DrinkNotFound("42".to_string())
    );

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_full_order_lifecycle() {
    let shop = open_shop();

    let order = shop
        .create_order(OrderCreate::new("1", "medium").with_extras(["oat milk", "vanilla"]))
        .await
        .expect("Failed to create order");
    assert_eq!(order.id.to_string(), "ORD-001");
    assert_eq!(order.drink_name, "Espresso");
    assert_eq!(order.total_price, 3.50);
    assert_eq!(order.status, OrderStatus::Pending);

    for status in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::PickedUp,
    ] {
        let updated = shop
            .update_order_status("ORD-001", status.clone())
            .await
            .expect("Failed to update status");
        assert_eq!(updated.status, status);
    }

    let fetched = shop.get_order("ORD-001").await.unwrap();
    assert_eq!(fetched.status, OrderStatus::PickedUp);
    assert_eq!(fetched.total_price, 3.50);

    shop.shutdown().await.expect("Failed to shut down");
}

#[tokio::test]
async fn test_prices_match_size_and_extras() {
    let shop = open_shop();

    let large_latte = shop
        .create_order(OrderCreate::new("3", "large"))
        .await
        .unwrap();
    assert_eq!(large_latte.total_price, 4.50);

    let green_tea = shop
        .create_order(OrderCreate::new("4", "small").with_extras(["honey", "lemon", "mint"]))
        .await
        .unwrap();
    assert_eq!(green_tea.total_price, 4.00);

    // Unrecognized sizes are accepted and priced as small.
    let venti = shop
        .create_order(OrderCreate::new("2", "venti"))
        .await
        .unwrap();
    assert_eq!(venti.total_price, 3.00);
    assert_eq!(venti.size, "venti");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_drink_consumes_no_id() {
    let shop = open_shop();

    shop.create_order(OrderCreate::new("1", "small"))
        .await
        .unwrap();

    let err = shop
        .create_order(OrderCreate::new("999", "small"))
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Menu(MenuError::DrinkNotFound("999".to_string())));
    assert_eq!(shop.list_orders().await.unwrap().len(), 1);

    let next = shop
        .create_order(OrderCreate::new("2", "small"))
        .await
        .unwrap();
    assert_eq!(next.id.to_string(), "ORD-002");

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_removes_order_and_ids_are_not_reused() {
    let shop = open_shop();

    for _ in 0..3 {
        shop.create_order(OrderCreate::new("6", "small"))
            .await
            .unwrap();
    }

    shop.cancel_order("ORD-003").await.unwrap();
    assert_eq!(
        shop.get_order("ORD-003").await.unwrap_err(),
        OrderError::NotFound("ORD-003".to_string())
    );
    assert_eq!(
        shop.cancel_order("ORD-003").await.unwrap_err(),
        OrderError::NotFound("ORD-003".to_string())
    );

    let next = shop
        .create_order(OrderCreate::new("6", "small"))
        .await
        .unwrap();
    assert_eq!(next.id, OrderId(4));

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_cancel_picked_up_is_conflict_and_order_remains() {
    let shop = open_shop();

    shop.create_order(OrderCreate::new("5", "medium"))
        .await
        .unwrap();
    shop.update_order_status("ORD-001", OrderStatus::PickedUp)
        .await
        .unwrap();

    let err = shop.cancel_order("ORD-001").await.unwrap_err();
    assert_eq!(err, OrderError::Conflict("ORD-001".to_string()));

    let still_there = shop.get_order("ORD-001").await.unwrap();
    assert_eq!(still_there.status, OrderStatus::PickedUp);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_keeps_creation_order_after_cancellations() {
    let shop = open_shop();

    // N = 6 creations, M = 2 cancellations.
    for drink_id in ["1", "2", "3", "4", "5", "6"] {
        shop.create_order(OrderCreate::new(drink_id, "small"))
            .await
            .unwrap();
    }
    shop.cancel_order("ORD-002").await.unwrap();
    shop.cancel_order("ORD-005").await.unwrap();

    let ids: Vec<String> = shop
        .list_orders()
        .await
        .unwrap()
        .iter()
        .map(|order| order.id.to_string())
        .collect();
    assert_eq!(ids, ["ORD-001", "ORD-003", "ORD-004", "ORD-006"]);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_non_canonical_ids_are_not_found() {
    let shop = open_shop();
    shop.create_order(OrderCreate::new("1", "small"))
        .await
        .unwrap();

    for id in ["ORD-1", "ORD-0001", "ord-001", "abc", ""] {
        assert_eq!(
            shop.get_order(id).await.unwrap_err(),
            OrderError::NotFound(id.to_string()),
            "id {id:?}"
        );
        assert!(matches!(
            shop.update_order_status(id, OrderStatus::Ready).await,
            Err(OrderError::NotFound(_))
        ));
        assert!(matches!(
            shop.cancel_order(id).await,
            Err(OrderError::NotFound(_))
        ));
    }

    assert_eq!(shop.get_order("ORD-001").await.unwrap().status, OrderStatus::Pending);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_decoded_payloads_drive_the_shop() {
    let shop = open_shop();

    let params = decode_order_request(r#"{"drink_id": "7", "size": "large", "extras": ["caramel"]}"#)
        .unwrap();
    let order = shop.create_order(params).await.unwrap();
    assert_eq!(order.drink_name, "Iced Latte");
    assert_eq!(order.total_price, 5.00);

    let status = decode_status_request(r#"{"status": "ready"}"#).unwrap();
    let order = shop
        .update_order_status("ORD-001", status)
        .await
        .unwrap();
    assert_eq!(order.status, OrderStatus::Ready);

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["id"], "ORD-001");
    assert_eq!(json["drink_id"], "7");
    assert_eq!(json["status"], "ready");
    assert_eq!(json["total_price"], 5.0);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_get_unique_ids() {
    let shop = Arc::new(open_shop());

    let mut handles = Vec::new();
    for i in 0..20 {
        let shop = shop.clone();
        handles.push(tokio::spawn(async move {
            let drink_id = ((i % 7) + 1).to_string();
            shop.create_order(OrderCreate::new(drink_id, "small"))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let order = handle.await.unwrap();
        assert!(ids.insert(order.id), "duplicate id {}", order.id);
    }
    assert_eq!(ids.len(), 20);
    assert!(ids.iter().all(|id| (1..=20).contains(&id.0)));

    let listed = shop.list_orders().await.unwrap();
    let listed_ids: Vec<u32> = listed.iter().map(|order| order.id.0).collect();
    assert_eq!(listed_ids, (1..=20).collect::<Vec<_>>());

    let shop = Arc::into_inner(shop).expect("all tasks finished");
    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_with_small_mailbox() {
    let config = ShopConfig {
        channel_capacity: 1,
        ..ShopConfig::default()
    };
    let shop = CoffeeShop::new(&config);

    for _ in 0..5 {
        shop.create_order(OrderCreate::new("1", "small"))
            .await
            .unwrap();
    }
    assert_eq!(shop.list_orders().await.unwrap().len(), 5);

    shop.shutdown().await.expect("shutdown should succeed");
}

#[tokio::test]
async fn test_picked_up_spelled_as_other_status_is_still_protected() {
    let shop = open_shop();
    shop.create_order(OrderCreate::new("1", "small"))
        .await
        .unwrap();

    shop.update_order_status("ORD-001", OrderStatus::Other("picked-up".to_string()))
        .await
        .unwrap();

    assert_eq!(
        shop.cancel_order("ORD-001").await.unwrap_err(),
        OrderError::Conflict("ORD-001".to_string())
    );

    // What is stored survives a trip through its JSON form unchanged.
    let stored = shop.get_order("ORD-001").await.unwrap();
    let json = serde_json::to_string(&stored).unwrap();
    let decoded: coffee_shop::model::Order = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, stored);

    shop.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_capacity_config_still_opens_the_shop() {
    let config = ShopConfig {
        channel_capacity: 0,
        ..ShopConfig::default()
    };
    assert!(config.validate().is_err());

    let shop = CoffeeShop::new(&config);
    let order = shop
        .create_order(OrderCreate::new("2", "small"))
        .await
        .unwrap();
    assert_eq!(order.id, OrderId(1));

    shop.shutdown().await.unwrap();
}
