//! Marketplace Admin library.
//!
//! The dashboard's shared state lives in a [`MarketplaceStore`](store::MarketplaceStore):
//! an in-memory container for the product catalog, orders, message threads
//! and UI selection flags. Views read snapshots of it, subscribe to changes,
//! and call its operations in response to user actions.
//!
//! Nothing is persisted; every store starts from the seed data.
//!
//! # Modules
//!
//! - [`models`] - Products, orders, threads and messages
//! - [`state`] - The snapshot type handed to readers
//! - [`store`] - The store, its operations and subscriptions
//! - [`views`] - Read models for each dashboard screen
//! - [`config`] - Environment configuration
//! - [`filters`] - Display formatting helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod state;
pub mod store;
pub mod views;

pub use error::AppError;
pub use state::{DrawerMode, StoreState, UiState};
pub use store::{MarketplaceStore, SubscriptionId};
