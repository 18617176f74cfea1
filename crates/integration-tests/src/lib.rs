//! Integration tests for the marketplace admin dashboard.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p marketplace-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_contract` - Store operations observed through snapshots and subscribers
//! - `dashboard_flows` - Multi-step user flows across view models
//!
//! Shared fixtures live here so every test file builds records the same way.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use marketplace_admin::models::{Message, Product};
use marketplace_core::{MessageId, Price, ProductId};

/// A product with the given ID, priced at `cents`.
#[must_use]
pub fn product(id: &str, name: &str, cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: String::new(),
        price: Price::usd(Decimal::new(cents, 2)),
        category: "Books".to_owned(),
        inventory: 5,
        images: vec!["x".to_owned()],
        rating: Decimal::ZERO,
        reviews: 0,
    }
}

/// A read message sent by the operator.
#[must_use]
pub fn operator_message(id: &str, content: &str) -> Message {
    Message {
        id: MessageId::new(id),
        sender: Message::OPERATOR.to_owned(),
        content: content.to_owned(),
        timestamp: NaiveDateTime::default(),
        is_read: true,
    }
}
