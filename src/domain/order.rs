use std::fmt;

use serde::{Deserialize, Serialize};

use super::Money;

/// A submitted order as recorded by the order book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_id: String,
    pub lines: Vec<PayloadLine>,
    pub total: Money,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// The payload accepted by the order creation call.
///
/// Only the fields the write operation understands are present; catalog
/// data such as stock never leaves the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub client_id: String,
    pub total: Money,
    pub lines: Vec<PayloadLine>,
}

/// One product line of an [`OrderPayload`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadLine {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
}

impl OrderPayload {
    /// Sum of `price * quantity` over the payload lines.
    pub fn line_total(&self) -> Money {
        self.lines.iter().map(|line| line.price.times(line.quantity)).sum()
    }
}
