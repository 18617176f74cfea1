//! Store snapshot shared with every view.
//!
//! [`StoreState`] is the full value of the dashboard's shared state at one
//! instant. The [`MarketplaceStore`](crate::store::MarketplaceStore) owns it;
//! readers get a shared borrow through `snapshot()` or through subscriber
//! callbacks, and may `clone()` it if they need to keep a copy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use marketplace_core::{OrderId, ProductId, ThreadId};

use crate::models::{Message, Order, Product, Thread};

/// Catalog, orders, conversations and UI selection flags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreState {
    /// Product catalog in insertion order.
    pub products: Vec<Product>,
    /// Orders (read-only seed data).
    pub orders: Vec<Order>,
    /// Conversation threads (read-only seed data).
    pub threads: Vec<Thread>,
    /// Messages per thread, oldest first.
    pub messages: BTreeMap<ThreadId, Vec<Message>>,
    /// UI selection state.
    pub ui: UiState,
}

impl StoreState {
    /// Look up a product by ID.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Look up a thread by ID.
    #[must_use]
    pub fn thread(&self, id: &ThreadId) -> Option<&Thread> {
        self.threads.iter().find(|t| &t.id == id)
    }

    /// Messages of a thread, oldest first. Empty if the thread has none.
    #[must_use]
    pub fn messages_for(&self, thread_id: &ThreadId) -> &[Message] {
        self.messages
            .get(thread_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total unread count across all threads.
    #[must_use]
    pub fn unread_total(&self) -> u32 {
        self.threads.iter().map(|t| t.unread).sum()
    }

    /// Serialize the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// UI selection flags held alongside the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Thread open in the messaging pane.
    pub selected_thread: Option<ThreadId>,
    /// Whether the navigation sidebar is expanded.
    pub sidebar_open: bool,
    /// Whether the product drawer is showing.
    pub product_drawer_open: bool,
    /// Product being edited; `None` while the drawer is in create mode.
    pub editing_product: Option<Product>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            selected_thread: None,
            sidebar_open: true,
            product_drawer_open: false,
            editing_product: None,
        }
    }
}

impl UiState {
    /// What the product drawer is currently doing.
    #[must_use]
    pub fn drawer_mode(&self) -> DrawerMode<'_> {
        match (self.product_drawer_open, &self.editing_product) {
            (false, _) => DrawerMode::Closed,
            (true, None) => DrawerMode::Create,
            (true, Some(product)) => DrawerMode::Edit(product),
        }
    }
}

/// Mode of the product drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerMode<'a> {
    /// Drawer hidden.
    Closed,
    /// Drawer open with a blank form.
    Create,
    /// Drawer open, pre-filled with this product.
    Edit(&'a Product),
}
