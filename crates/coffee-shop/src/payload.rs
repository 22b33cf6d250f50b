//! Request body decoding for whatever transport sits in front of the shop.

use crate::model::{OrderCreate, OrderStatus};
use crate::order_actor::OrderError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StatusRequest {
    status: OrderStatus,
}

/// Decodes `{"drink_id": "...", "size": "...", "extras": [...]}`.
///
/// `drink_id` is required; `size` defaults to `""` and `extras` to `[]`,
/// whether they are missing or `null`.
/// Whether the drink exists is checked when the order is placed, not here.
pub fn decode_order_request(body: &str) -> Result<OrderCreate, OrderError> {
    serde_json::from_str(body).map_err(|e| OrderError::InvalidInput(e.to_string()))
}

/// Decodes `{"status": "..."}`. Any string is a status.
pub fn decode_status_request(body: &str) -> Result<OrderStatus, OrderError> {
    serde_json::from_str::<StatusRequest>(body)
        .map(|request| request.status)
        .map_err(|e| OrderError::InvalidInput(e.to_string()))
}
