//! The product drawer: create and edit form for catalog entries.
//!
//! The form holds raw text exactly as typed. `submit` is the only place that
//! parses it; the store receives nothing until every field is valid.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use marketplace_core::{CurrencyCode, Price, PriceError, ProductId};

use crate::models::Product;
use crate::state::DrawerMode;
use crate::store::MarketplaceStore;

/// Why a drawer submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductFormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("price: {0}")]
    Price(#[from] PriceError),

    #[error("inventory must be a whole number of units: {0}")]
    Inventory(String),

    #[error("product {0} no longer exists")]
    Removed(ProductId),
}

/// Which store operation a successful submit performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(ProductId),
    Updated(ProductId),
}

impl Submitted {
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        match self {
            Self::Created(id) | Self::Updated(id) => id,
        }
    }
}

/// Drawer fields as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub inventory: String,
}

impl ProductForm {
    /// Pre-fill from the edited product, or start blank.
    #[must_use]
    pub fn for_mode(mode: DrawerMode<'_>) -> Self {
        match mode {
            DrawerMode::Edit(product) => Self {
                name: product.name.clone(),
                description: product.description.clone(),
                price: product.price.amount.to_string(),
                category: product.category.clone(),
                inventory: product.inventory.to_string(),
            },
            DrawerMode::Create | DrawerMode::Closed => Self::default(),
        }
    }

    /// Drawer title for the mode.
    #[must_use]
    pub const fn title(mode: DrawerMode<'_>) -> &'static str {
        match mode {
            DrawerMode::Edit(_) => "Edit Product",
            DrawerMode::Create | DrawerMode::Closed => "Add New Product",
        }
    }

    /// Validate the form and write it to the store.
    ///
    /// In edit mode the product keeps its ID, images, rating and reviews and
    /// replaces the stored entry. Otherwise a new product is appended with an
    /// ID derived from `now`, the given placeholder image and no reviews. The
    /// drawer is closed after either.
    ///
    /// # Errors
    ///
    /// Returns `ProductFormError` if a field is blank, a number does not
    /// parse, or the product being edited has been deleted since the drawer
    /// opened. The store is left untouched and the drawer stays open.
    pub fn submit(
        &self,
        store: &mut MarketplaceStore,
        placeholder_image: &str,
        now: DateTime<Utc>,
    ) -> Result<Submitted, ProductFormError> {
        let name = required(&self.name, "name")?;
        let description = required(&self.description, "description")?;
        let category = required(&self.category, "category")?;
        required(&self.price, "price")?;
        let inventory = required(&self.inventory, "inventory")?;

        let price = Price::parse(&self.price, CurrencyCode::USD)?;
        let inventory = inventory
            .parse::<u32>()
            .map_err(|_| ProductFormError::Inventory(inventory.to_owned()))?;

        let editing = store.snapshot().ui.editing_product.clone();
        let submitted = if let Some(existing) = editing {
            let id = existing.id.clone();
            if store.snapshot().product(&id).is_none() {
                return Err(ProductFormError::Removed(id));
            }
            store.update_product(Product {
                name: name.to_owned(),
                description: description.to_owned(),
                price,
                category: category.to_owned(),
                inventory,
                ..existing
            });
            Submitted::Updated(id)
        } else {
            let id = fresh_product_id(store, now);
            store.add_product(Product {
                id: id.clone(),
                name: name.to_owned(),
                description: description.to_owned(),
                price,
                category: category.to_owned(),
                inventory,
                images: vec![placeholder_image.to_owned()],
                rating: Decimal::ZERO,
                reviews: 0,
            });
            Submitted::Created(id)
        };

        store.close_product_drawer();
        Ok(submitted)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ProductFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ProductFormError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

/// Millisecond timestamp, bumped until no catalog entry uses it.
fn fresh_product_id(store: &MarketplaceStore, now: DateTime<Utc>) -> ProductId {
    let mut candidate = now.timestamp_millis();
    loop {
        let id = ProductId::new(candidate.to_string());
        if store.snapshot().product(&id).is_none() {
            return id;
        }
        candidate += 1;
    }
}
