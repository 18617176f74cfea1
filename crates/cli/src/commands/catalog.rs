//! Product catalog commands: list, detail, and the drawer form.

use std::io::Write;

use chrono::Utc;
use clap::Args;

use marketplace_admin::config::AdminConfig;
use marketplace_admin::views::products::product_detail;
use marketplace_admin::views::{CategoryFilter, ProductForm, ProductQuery, categories};
use marketplace_admin::{AppError, MarketplaceStore};
use marketplace_core::ProductId;

/// Every drawer field, for creating a product.
#[derive(Debug, Args)]
pub struct ProductFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub price: String,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub inventory: String,
}

impl From<ProductFields> for ProductForm {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            inventory: fields.inventory,
        }
    }
}

/// Drawer fields to change when editing; omitted fields keep their value.
#[derive(Debug, Args)]
pub struct ProductEdits {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub inventory: Option<String>,
}

impl ProductEdits {
    fn apply(self, form: &mut ProductForm) {
        let fields = [
            (self.name, &mut form.name),
            (self.description, &mut form.description),
            (self.price, &mut form.price),
            (self.category, &mut form.category),
            (self.inventory, &mut form.inventory),
        ];
        for (edit, slot) in fields {
            if let Some(value) = edit {
                *slot = value;
            }
        }
    }
}

/// Print the filtered product list.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(
    store: &MarketplaceStore,
    search: &str,
    category: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = store.snapshot();
    let query = ProductQuery {
        search: search.to_owned(),
        category: CategoryFilter::parse(category),
    };

    let labels: Vec<String> = categories(state).iter().map(CategoryFilter::label).collect();
    writeln!(out, "Categories: {}", labels.join(", "))?;

    let products = query.apply(state);
    if products.is_empty() {
        writeln!(out, "No products found. {}", query.empty_hint())?;
    }
    for product in &products {
        writeln!(
            out,
            "{:<14} {:<30} {:>10}  {} ({})  stock {}",
            product.id,
            product.name,
            product.price.display(),
            product.rating,
            product.reviews,
            product.inventory,
        )?;
    }

    tracing::info!(shown = products.len(), filtered = query.is_filtered(), "Listed products");
    Ok(())
}

/// Print one product.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no product has this ID.
pub fn show(
    store: &MarketplaceStore,
    id: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = product_detail(store.snapshot(), &ProductId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    writeln!(out, "{} [{}]", product.name, product.id)?;
    writeln!(out, "  {}", product.description)?;
    writeln!(out, "  Price:     {}", product.price.display())?;
    writeln!(out, "  Category:  {}", product.category)?;
    writeln!(out, "  Inventory: {} units", product.inventory)?;
    writeln!(out, "  Status:    {}", product.stock_level())?;
    writeln!(out, "  Rating:    {} ({} reviews)", product.rating, product.reviews)?;
    for image in &product.images {
        writeln!(out, "  Image:     {image}")?;
    }
    Ok(())
}

/// Submit the drawer in create mode.
///
/// # Errors
///
/// Returns an error if a field is invalid or writing fails.
pub fn add(
    store: &mut MarketplaceStore,
    config: &AdminConfig,
    fields: ProductFields,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    store.open_product_drawer(None);
    let form = ProductForm::from(fields);
    let submitted = form
        .submit(store, &config.placeholder_image, Utc::now())
        .map_err(AppError::from)?;

    tracing::info!(product_id = %submitted.product_id(), "Product created");
    show(store, submitted.product_id().as_str(), out)
}

/// Submit the drawer in edit mode for an existing product.
///
/// # Errors
///
/// Returns an error if the product does not exist, a field is invalid, or
/// writing fails.
pub fn edit(
    store: &mut MarketplaceStore,
    config: &AdminConfig,
    id: &str,
    edits: ProductEdits,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = store
        .snapshot()
        .product(&ProductId::new(id))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    store.open_product_drawer(Some(product));
    let mut form = ProductForm::for_mode(store.snapshot().ui.drawer_mode());
    edits.apply(&mut form);

    let submitted = form
        .submit(store, &config.placeholder_image, Utc::now())
        .map_err(AppError::from)?;

    tracing::info!(product_id = %submitted.product_id(), "Product updated");
    show(store, submitted.product_id().as_str(), out)
}
