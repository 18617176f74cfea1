//! Marketplace Core - Shared types library.
//!
//! This crate provides common types used across all marketplace components:
//! - `admin` - In-memory dashboard store and view models
//! - `cli` - Command-line driver for the dashboard
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no state. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
