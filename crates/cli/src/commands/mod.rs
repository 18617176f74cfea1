//! Subcommand implementations.
//!
//! Each command reads from or drives a [`MarketplaceStore`](marketplace_admin::MarketplaceStore)
//! and writes plain text to the given writer.

pub mod analytics;
pub mod catalog;
pub mod dashboard;
pub mod inbox;
pub mod orders;
