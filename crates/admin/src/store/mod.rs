//! The marketplace store: single owner of the dashboard's shared state.
//!
//! Every mutation goes through one of the operations on [`MarketplaceStore`].
//! After each operation the store calls every subscriber, in registration
//! order, with a shared borrow of the new [`StoreState`]. Subscribers cannot
//! call back into the store while being notified, so one operation always
//! completes before the next begins.
//!
//! Operations never fail. Updating or deleting an ID that is not in the
//! catalog is a no-op, and subscribers are still notified.
//!
//! # Example
//!
//! ```
//! use marketplace_admin::store::MarketplaceStore;
//! use marketplace_core::ProductId;
//!
//! let mut store = MarketplaceStore::seeded();
//! store.delete_product(&ProductId::new("1"));
//! assert_eq!(store.snapshot().products.len(), 3);
//! ```

pub mod seed;
mod subscription;

use tracing::debug;

use marketplace_core::{ProductId, ThreadId};

use crate::models::{Message, Product};
use crate::state::StoreState;

pub use subscription::SubscriptionId;
use subscription::Subscribers;

/// In-memory store for catalog, orders, conversations and UI flags.
#[derive(Debug)]
pub struct MarketplaceStore {
    state: StoreState,
    subscribers: Subscribers,
}

impl Default for MarketplaceStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl MarketplaceStore {
    /// Create a store holding `state`, with no subscribers.
    #[must_use]
    pub fn new(state: StoreState) -> Self {
        Self {
            state,
            subscribers: Subscribers::default(),
        }
    }

    /// Create a store holding the demo seed data.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed::seed_state())
    }

    /// Current state.
    #[must_use]
    pub const fn snapshot(&self) -> &StoreState {
        &self.state
    }

    /// Register a listener called after every operation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreState) + 'static) -> SubscriptionId {
        let id = self.subscribers.add(Box::new(listener));
        debug!(subscription = id.as_u64(), "Subscriber added");
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.remove(id);
        debug!(subscription = id.as_u64(), removed, "Subscriber removed");
        removed
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self) {
        self.subscribers.notify(&self.state);
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Replace the whole catalog.
    pub fn set_products(&mut self, products: Vec<Product>) {
        debug!(count = products.len(), "Replacing catalog");
        self.state.products = products;
        self.publish();
    }

    /// Append a product. The caller supplies a fresh ID.
    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = %product.id, "Adding product");
        self.state.products.push(product);
        self.publish();
    }

    /// Replace the product with the same ID, keeping its position.
    pub fn update_product(&mut self, product: Product) {
        if let Some(slot) = self
            .state
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
        {
            debug!(product_id = %product.id, "Updating product");
            *slot = product;
        } else {
            debug!(product_id = %product.id, "Update skipped: product not found");
        }
        self.publish();
    }

    /// Remove the product with this ID, if present.
    pub fn delete_product(&mut self, id: &ProductId) {
        let before = self.state.products.len();
        self.state.products.retain(|p| &p.id != id);
        debug!(
            product_id = %id,
            removed = before != self.state.products.len(),
            "Deleting product"
        );
        self.publish();
    }

    // =========================================================================
    // Messaging
    // =========================================================================

    /// Open a thread in the messaging pane, or clear the selection.
    pub fn set_selected_thread(&mut self, thread_id: Option<ThreadId>) {
        debug!(thread_id = ?thread_id, "Selecting thread");
        self.state.ui.selected_thread = thread_id;
        self.publish();
    }

    /// Append a message to a thread, creating its message list if needed.
    pub fn add_message(&mut self, thread_id: ThreadId, message: Message) {
        debug!(thread_id = %thread_id, message_id = %message.id, "Adding message");
        self.state
            .messages
            .entry(thread_id)
            .or_default()
            .push(message);
        self.publish();
    }

    // =========================================================================
    // UI flags
    // =========================================================================

    /// Open the product drawer: edit mode with a product, create mode without.
    pub fn open_product_drawer(&mut self, product: Option<Product>) {
        debug!(
            editing = ?product.as_ref().map(|p| &p.id),
            "Opening product drawer"
        );
        self.state.ui.product_drawer_open = true;
        self.state.ui.editing_product = product;
        self.publish();
    }

    /// Close the product drawer and forget the edited product.
    pub fn close_product_drawer(&mut self) {
        debug!("Closing product drawer");
        self.state.ui.product_drawer_open = false;
        self.state.ui.editing_product = None;
        self.publish();
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.ui.sidebar_open = !self.state.ui.sidebar_open;
        debug!(open = self.state.ui.sidebar_open, "Toggled sidebar");
        self.publish();
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        debug!(open, "Setting sidebar");
        self.state.ui.sidebar_open = open;
        self.publish();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDateTime;
    use marketplace_core::MessageId;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::product::tests::sample_product;
    use crate::state::DrawerMode;

    fn operator_message(id: &str) -> Message {
        Message {
            id: MessageId::new(id),
            sender: Message::OPERATOR.to_string(),
            content: "hi".to_string(),
            timestamp: NaiveDateTime::default(),
            is_read: true,
        }
    }

    #[test]
    fn test_add_product_appends() {
        let mut store = MarketplaceStore::seeded();
        let product = sample_product("99");
        store.add_product(product.clone());

        let products = &store.snapshot().products;
        assert_eq!(products.len(), 5);
        assert_eq!(products.last(), Some(&product));
        assert_eq!(products[0].id, ProductId::new("1"));
    }

    #[test]
    fn test_update_product_replaces_in_place() {
        let mut store = MarketplaceStore::seeded();
        let mut replacement = sample_product("2");
        replacement.price.amount = Decimal::new(1999, 2);
        store.update_product(replacement.clone());

        let products = &store.snapshot().products;
        assert_eq!(products.len(), 4);
        assert_eq!(products[1], replacement);
    }

    #[test]
    fn test_update_missing_product_is_noop() {
        let mut store = MarketplaceStore::seeded();
        let before = store.snapshot().clone();
        store.update_product(sample_product("missing"));
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_delete_product() {
        let mut store = MarketplaceStore::seeded();
        store.delete_product(&ProductId::new("3"));
        assert_eq!(store.snapshot().products.len(), 3);
        assert!(store.snapshot().product(&ProductId::new("3")).is_none());
    }

    #[test]
    fn test_delete_missing_product_is_noop() {
        let mut store = MarketplaceStore::seeded();
        let before = store.snapshot().products.clone();
        store.delete_product(&ProductId::new("404"));
        assert_eq!(store.snapshot().products, before);
    }

    #[test]
    fn test_set_products_replaces_catalog() {
        let mut store = MarketplaceStore::seeded();
        store.set_products(vec![sample_product("a")]);
        assert_eq!(store.snapshot().products.len(), 1);
    }

    #[test]
    fn test_add_message_appends_last() {
        let mut store = MarketplaceStore::seeded();
        let thread = ThreadId::new("thread-1");
        store.add_message(thread.clone(), operator_message("msg-x"));

        let messages = store.snapshot().messages_for(&thread);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages.last().unwrap().id, MessageId::new("msg-x"));
    }

    #[test]
    fn test_add_message_creates_thread_entry() {
        let mut store = MarketplaceStore::seeded();
        let thread = ThreadId::new("thread-new");
        store.add_message(thread.clone(), operator_message("m1"));
        assert_eq!(store.snapshot().messages_for(&thread).len(), 1);
    }

    #[test]
    fn test_add_message_is_not_idempotent() {
        let mut store = MarketplaceStore::seeded();
        let thread = ThreadId::new("thread-2");
        store.add_message(thread.clone(), operator_message("dup"));
        store.add_message(thread.clone(), operator_message("dup"));
        assert_eq!(store.snapshot().messages_for(&thread).len(), 5);
    }

    #[test]
    fn test_selected_thread() {
        let mut store = MarketplaceStore::seeded();
        store.set_selected_thread(Some(ThreadId::new("thread-2")));
        assert_eq!(
            store.snapshot().ui.selected_thread,
            Some(ThreadId::new("thread-2"))
        );

        store.set_selected_thread(None);
        assert!(store.snapshot().ui.selected_thread.is_none());
    }

    #[test]
    fn test_product_drawer_modes() {
        let mut store = MarketplaceStore::seeded();

        store.open_product_drawer(None);
        assert_eq!(store.snapshot().ui.drawer_mode(), DrawerMode::Create);

        let product = store.snapshot().products[0].clone();
        store.open_product_drawer(Some(product.clone()));
        assert_eq!(store.snapshot().ui.drawer_mode(), DrawerMode::Edit(&product));

        store.close_product_drawer();
        assert!(!store.snapshot().ui.product_drawer_open);
        assert!(store.snapshot().ui.editing_product.is_none());
    }

    #[test]
    fn test_sidebar() {
        let mut store = MarketplaceStore::seeded();
        assert!(store.snapshot().ui.sidebar_open);

        store.toggle_sidebar();
        assert!(!store.snapshot().ui.sidebar_open);

        store.set_sidebar_open(true);
        assert!(store.snapshot().ui.sidebar_open);
    }

    #[test]
    fn test_subscribers_see_post_mutation_state() {
        let mut store = MarketplaceStore::seeded();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.products.len()));

        store.add_product(sample_product("99"));
        store.delete_product(&ProductId::new("99"));
        store.delete_product(&ProductId::new("99"));

        assert_eq!(*seen.borrow(), vec![5, 4, 4]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = MarketplaceStore::seeded();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.toggle_sidebar();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_sidebar();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_stores_are_isolated() {
        let mut first = MarketplaceStore::seeded();
        let second = MarketplaceStore::seeded();
        first.delete_product(&ProductId::new("1"));
        assert_eq!(second.snapshot().products.len(), 4);
    }
}
