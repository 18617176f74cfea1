//! Product catalog model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use marketplace_core::{Price, ProductId};

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price (never negative).
    pub price: Price,
    /// Free-text category label.
    pub category: String,
    /// Units in stock.
    pub inventory: u32,
    /// Image URIs, primary image first.
    pub images: Vec<String>,
    /// Average review score from 0 to 5.
    pub rating: Decimal,
    /// Number of reviews.
    pub reviews: u32,
}

impl Product {
    /// The image shown in listings.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match on the product name.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Stock badge for the current inventory.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        StockLevel::for_inventory(self.inventory)
    }
}

/// Stock badge shown on the product detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockLevel {
    /// More than 20 units.
    InStock,
    /// 11 to 20 units.
    Low,
    /// 10 units or fewer.
    Critical,
}

impl StockLevel {
    #[must_use]
    pub const fn for_inventory(inventory: u32) -> Self {
        match inventory {
            21.. => Self::InStock,
            11..=20 => Self::Low,
            _ => Self::Critical,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::Low => "Low Stock",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
