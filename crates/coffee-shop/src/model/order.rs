//! Customer orders.
//!
//! [`Order`] implements the [`ActorEntity`](resource_actor::ActorEntity) trait
//! (see `order_actor::entity`), so it is managed by a
//! [`ResourceActor`](resource_actor::ResourceActor). It is created from an
//! [`OrderCreate`] and changed only through an [`OrderUpdate`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

const ORDER_ID_PREFIX: &str = "ORD-";

/// Type-safe identifier for Orders, rendered as `ORD-001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:03}", ORDER_ID_PREFIX, self.0)
    }
}

/// An order id that is not in canonical `ORD-NNN` form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid order id: {0}")]
pub struct ParseOrderIdError(pub String);

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    /// Only the exact rendering is accepted: `ORD-7` and `ORD-0007` are not
    /// `ORD-007`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseOrderIdError(s.to_string());
        let digits = s.strip_prefix(ORDER_ID_PREFIX).ok_or_else(invalid)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id = OrderId(digits.parse().map_err(|_| invalid())?);
        if id.to_string() != s {
            return Err(invalid());
        }
        Ok(id)
    }
}

impl TryFrom<String> for OrderId {
    type Error = ParseOrderIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

/// Fulfilment stage of an order.
///
/// Status updates are not checked against a transition table, and labels
/// outside the four known stages are kept verbatim in [`OrderStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    PickedUp,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked-up",
            OrderStatus::Other(label) => label,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        match label {
            "pending" => OrderStatus::Pending,
            "preparing" => OrderStatus::Preparing,
            "ready" => OrderStatus::Ready,
            "picked-up" => OrderStatus::PickedUp,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        OrderStatus::from(label.as_str())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub drink_id: String,
    pub drink_name: String,
    pub size: String,
    pub extras: Vec<String>,
    pub total_price: f64,
    pub status: OrderStatus,
    pub ordered_at: DateTime<Utc>,
}

impl Order {
    /// Creates a pending order stamped with the current time.
    ///
    /// `drink_name` and `total_price` start empty; the order actor fills them
    /// in from the menu before the order is stored.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            drink_id: params.drink_id,
            drink_name: String::new(),
            size: params.size,
            extras: params.extras,
            total_price: 0.0,
            status: OrderStatus::Pending,
            ordered_at: Utc::now(),
        }
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub drink_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extras: Vec<String>,
}

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl OrderCreate {
    pub fn new(drink_id: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            drink_id: drink_id.into(),
            size: size.into(),
            extras: Vec::new(),
        }
    }

    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extras = extras.into_iter().map(Into::into).collect();
        self
    }
}

/// Payload for a status update. Only the status of an order is ever mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}
