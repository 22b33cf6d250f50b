//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter that
//! hides module paths; log lines carry `entity_type` and id fields instead.
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from
//! [`ShopConfig::log_filter`]:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! COFFEE_SHOP_LOG_FILTER=warn cargo run
//! ```
//!
//! With `info`, placing an order reads:
//!
//! ```text
//! INFO Created entity_type="Order" id=ORD-001 size=1
//! INFO create_order{params=OrderCreate { drink_id: "1", .. }}: Order placed order_id=ORD-001 total_price=3.5
//! ```
use crate::config::ShopConfig;
use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing(config: &ShopConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
