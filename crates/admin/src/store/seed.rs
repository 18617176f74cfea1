//! Fixed demo data the store starts with.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use marketplace_core::{MessageId, OrderId, OrderStatus, Price, ProductId, ThreadId};

use crate::models::{Message, Order, Product, Thread};
use crate::state::{StoreState, UiState};

/// Image used for every seeded product.
pub const PLACEHOLDER_IMAGE: &str = "https://c.animaapp.com/mhw515p9c8jRKK/img/ai_1.png";

/// The state a fresh session starts from.
#[must_use]
pub fn seed_state() -> StoreState {
    StoreState {
        products: products(),
        orders: orders(),
        threads: threads(),
        messages: messages(),
        ui: UiState::default(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(2024, 1, day)
        .and_hms_opt(hour, minute, 0)
        .unwrap_or_default()
}

fn usd(cents: i64) -> Price {
    Price::usd(Decimal::new(cents, 2))
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    category: &str,
    inventory: u32,
    rating_tenths: i64,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: usd(price_cents),
        category: category.to_owned(),
        inventory,
        images: vec![PLACEHOLDER_IMAGE.to_owned()],
        rating: Decimal::new(rating_tenths, 1),
        reviews,
    }
}

fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation",
            29_999,
            "Electronics",
            45,
            45,
            128,
        ),
        product(
            "2",
            "Smart Fitness Watch",
            "Track your fitness goals with advanced health monitoring",
            19_999,
            "Electronics",
            32,
            47,
            89,
        ),
        product(
            "3",
            "Ergonomic Office Chair",
            "Comfortable chair designed for long work sessions",
            44_999,
            "Furniture",
            18,
            43,
            56,
        ),
        product(
            "4",
            "Portable Bluetooth Speaker",
            "Waterproof speaker with 12-hour battery life",
            7_999,
            "Electronics",
            67,
            46,
            203,
        ),
    ]
}

fn order(
    id: &str,
    product_name: &str,
    customer: &str,
    status: OrderStatus,
    total_cents: i64,
    day: u32,
) -> Order {
    Order {
        id: OrderId::new(id),
        product_name: product_name.to_owned(),
        customer: customer.to_owned(),
        status,
        total: usd(total_cents),
        date: date(2024, 1, day),
    }
}

fn orders() -> Vec<Order> {
    vec![
        order(
            "ORD-001",
            "Premium Wireless Headphones",
            "John Doe",
            OrderStatus::Processing,
            29_999,
            15,
        ),
        order(
            "ORD-002",
            "Smart Fitness Watch",
            "Jane Smith",
            OrderStatus::Shipped,
            19_999,
            14,
        ),
        order(
            "ORD-003",
            "Ergonomic Office Chair",
            "Bob Johnson",
            OrderStatus::Delivered,
            44_999,
            13,
        ),
        order(
            "ORD-004",
            "Portable Bluetooth Speaker",
            "Alice Williams",
            OrderStatus::Pending,
            7_999,
            15,
        ),
    ]
}

fn threads() -> Vec<Thread> {
    vec![
        Thread {
            id: ThreadId::new("thread-1"),
            participant: "John Doe".to_owned(),
            last_message: "When will my order ship?".to_owned(),
            timestamp: at(15, 10, 30),
            unread: 1,
        },
        Thread {
            id: ThreadId::new("thread-2"),
            participant: "Jane Smith".to_owned(),
            last_message: "Thank you for the quick delivery!".to_owned(),
            timestamp: at(14, 15, 20),
            unread: 0,
        },
    ]
}

fn message(id: &str, sender: &str, content: &str, timestamp: NaiveDateTime, is_read: bool) -> Message {
    Message {
        id: MessageId::new(id),
        sender: sender.to_owned(),
        content: content.to_owned(),
        timestamp,
        is_read,
    }
}

fn messages() -> BTreeMap<ThreadId, Vec<Message>> {
    let mut messages = BTreeMap::new();
    messages.insert(
        ThreadId::new("thread-1"),
        vec![
            message(
                "msg-1",
                "John Doe",
                "Hi, I just placed an order for the wireless headphones.",
                at(15, 10, 0),
                true,
            ),
            message(
                "msg-2",
                Message::OPERATOR,
                "Thank you for your order! It will be processed within 24 hours.",
                at(15, 10, 15),
                true,
            ),
            message(
                "msg-3",
                "John Doe",
                "When will my order ship?",
                at(15, 10, 30),
                false,
            ),
        ],
    );
    messages.insert(
        ThreadId::new("thread-2"),
        vec![
            message(
                "msg-4",
                "Jane Smith",
                "I received my fitness watch today!",
                at(14, 15, 0),
                true,
            ),
            message(
                "msg-5",
                Message::OPERATOR,
                "Great! We hope you enjoy it.",
                at(14, 15, 10),
                true,
            ),
            message(
                "msg-6",
                "Jane Smith",
                "Thank you for the quick delivery!",
                at(14, 15, 20),
                true,
            ),
        ],
    );
    messages
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_seed_counts() {
        let state = seed_state();
        assert_eq!(state.products.len(), 4);
        assert_eq!(state.orders.len(), 4);
        assert_eq!(state.threads.len(), 2);
        assert_eq!(state.messages.values().map(Vec::len).sum::<usize>(), 6);
    }

    #[test]
    fn test_seed_product_ids_are_unique() {
        let state = seed_state();
        let ids: HashSet<_> = state.products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), state.products.len());
    }

    #[test]
    fn test_seed_threads_summarise_last_message() {
        let state = seed_state();
        for thread in &state.threads {
            let last = state.messages_for(&thread.id).last().expect("seeded messages");
            assert_eq!(last.content, thread.last_message);
            assert_eq!(last.timestamp, thread.timestamp);
        }
    }

    #[test]
    fn test_seed_values() {
        let state = seed_state();
        let headphones = state.product(&ProductId::new("1")).expect("product 1");
        assert_eq!(headphones.price.display(), "$299.99");
        assert_eq!(headphones.rating, Decimal::new(45, 1));

        let order = state.order(&OrderId::new("ORD-004")).expect("order 4");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.date, date(2024, 1, 15));
    }
}
