//! Order model.
//!
//! Orders are seed data: nothing in the dashboard creates, edits or removes
//! them. `product_name` and `customer` are denormalized text and are not
//! linked to catalog entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use marketplace_core::{OrderId, OrderStatus, Price};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID (e.g. `ORD-001`).
    pub id: OrderId,
    /// Name of the purchased product.
    pub product_name: String,
    /// Customer display name.
    pub customer: String,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Order total.
    pub total: Price,
    /// Date the order was placed.
    pub date: NaiveDate,
}

impl Order {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }
}
