//! Marketplace CLI - drive the admin dashboard from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Headline figures and recent orders
//! mp-cli dashboard
//!
//! # Search the catalog
//! mp-cli products --search watch --category Electronics
//!
//! # Orders under one status tab
//! mp-cli orders --status shipped
//!
//! # Sales trend and key metrics
//! mp-cli analytics
//!
//! # Reply to a customer
//! mp-cli send thread-1 "Your order ships tomorrow"
//! ```
//!
//! # Commands
//!
//! - `dashboard` - Summary figures and recent orders
//! - `products` / `product` - Catalog list and detail
//! - `add-product` / `edit-product` - Submit the product drawer
//! - `orders` / `order` - Order list filtered by status, and order detail
//! - `analytics` - Sales trend, category shares, best sellers, key metrics
//! - `nav` - Sidebar with a view selected
//! - `inbox` / `send` - Message threads
//! - `snapshot` - Full store state as JSON
//!
//! Every invocation starts from a freshly seeded store; nothing is saved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_admin::MarketplaceStore;
use marketplace_admin::config::AdminConfig;

mod commands;

#[derive(Parser)]
#[command(name = "mp-cli")]
#[command(author, version, about = "Marketplace admin dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show headline figures and recent orders
    Dashboard,
    /// List products
    Products {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category label, or `all`
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Show one product
    Product {
        /// Product ID
        id: String,
    },
    /// Create a product through the drawer form
    AddProduct {
        #[command(flatten)]
        fields: commands::catalog::ProductFields,
    },
    /// Edit a product through the drawer form
    EditProduct {
        /// Product ID
        id: String,

        #[command(flatten)]
        fields: commands::catalog::ProductEdits,
    },
    /// List orders
    Orders {
        /// Status tab (`all`, `pending`, `processing`, `shipped`, `delivered`, `cancelled`)
        #[arg(short, long, default_value = "all")]
        status: String,
    },
    /// Show one order
    Order {
        /// Order ID
        id: String,
    },
    /// Show sales trend, category performance and key metrics
    Analytics,
    /// Switch views and print the sidebar
    Nav {
        /// View name (`dashboard`, `products`, `product-detail`, `orders`, ...)
        view: String,

        /// Product opened in the detail view
        #[arg(short, long)]
        product: Option<String>,
    },
    /// Show message threads, optionally opening one
    Inbox {
        /// Thread to open
        #[arg(short, long)]
        thread: Option<String>,
    },
    /// Send a message to a thread
    Send {
        /// Thread ID
        thread: String,

        /// Message text
        text: String,
    },
    /// Print the full store state as JSON
    Snapshot,
}

fn main() {
    let config = match AdminConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(&config);

    let cli = Cli::parse();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `EnvFilter`, JSON or text output.
fn init_tracing(config: &AdminConfig) {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "marketplace_admin=info,mp_cli=info".into());

    let json_layer = config
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!config.log_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli, config: &AdminConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = MarketplaceStore::seeded();
    store.subscribe(|state| {
        tracing::debug!(
            products = state.products.len(),
            threads = state.messages.len(),
            drawer_open = state.ui.product_drawer_open,
            "Store updated"
        );
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Dashboard => commands::dashboard::show(&store, config, &mut out)?,
        Commands::Products { search, category } => {
            commands::catalog::list(&store, &search, &category, &mut out)?;
        }
        Commands::Product { id } => commands::catalog::show(&store, &id, &mut out)?,
        Commands::AddProduct { fields } => {
            commands::catalog::add(&mut store, config, fields, &mut out)?;
        }
        Commands::EditProduct { id, fields } => {
            commands::catalog::edit(&mut store, config, &id, fields, &mut out)?;
        }
        Commands::Orders { status } => commands::orders::list(&store, &status, &mut out)?,
        Commands::Order { id } => commands::orders::show(&store, &id, &mut out)?,
        Commands::Analytics => commands::analytics::show(&mut out)?,
        Commands::Nav { view, product } => {
            commands::dashboard::navigate(&view, product.as_deref(), &mut out)?;
        }
        Commands::Inbox { thread } => {
            commands::inbox::show(&mut store, thread.as_deref(), &mut out)?;
        }
        Commands::Send { thread, text } => {
            commands::inbox::send(&mut store, &thread, &text, &mut out)?;
        }
        Commands::Snapshot => writeln!(out, "{}", store.snapshot().to_json_pretty()?)?,
    }

    out.flush()?;
    Ok(())
}
