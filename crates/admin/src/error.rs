//! Unified error handling for the dashboard layer.
//!
//! Store operations are infallible; errors only come from parsing user input
//! and configuration before anything reaches the store.

use thiserror::Error;

use marketplace_core::StatusParseError;

use crate::config::ConfigError;
use crate::views::navigation::ViewParseError;
use crate::views::product_drawer::ProductFormError;

/// Application-level error type for the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Product drawer input was rejected.
    #[error("Invalid product: {0}")]
    ProductForm(#[from] ProductFormError),

    /// Unknown order status filter.
    #[error("Bad request: {0}")]
    Status(#[from] StatusParseError),

    /// Unknown view name.
    #[error("Bad request: {0}")]
    View(#[from] ViewParseError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from the operator.
    #[error("Bad request: {0}")]
    BadRequest(String),
}
