//! Domain models for the marketplace dashboard.
//!
//! All entities are owned by the [`MarketplaceStore`](crate::store::MarketplaceStore);
//! views only borrow them for rendering.

pub mod chat;
pub mod order;
pub mod product;

pub use chat::{Message, Thread};
pub use order::Order;
pub use product::{Product, StockLevel};
