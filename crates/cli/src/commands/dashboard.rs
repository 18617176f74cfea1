//! Dashboard summary and sidebar navigation commands.

use std::io::Write;

use marketplace_admin::config::AdminConfig;
use marketplace_admin::filters::{short_date, status_tone};
use marketplace_admin::views::navigation::SidebarSection;
use marketplace_admin::views::{DashboardSummary, Navigator, View};
use marketplace_admin::{AppError, MarketplaceStore};
use marketplace_core::ProductId;

/// Print headline figures and the most recent orders.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(
    store: &MarketplaceStore,
    config: &AdminConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = DashboardSummary::build(store.snapshot(), config.recent_orders_limit);

    writeln!(out, "Dashboard")?;
    for stat in &summary.stats {
        writeln!(
            out,
            "  {:<16} {:>8}  {}",
            stat.label,
            stat.value,
            stat.change_label()
        )?;
    }
    writeln!(out)?;
    let sales: Vec<String> = summary
        .sales
        .iter()
        .map(|m| format!("{} {}", m.month, m.sales.amount))
        .collect();
    writeln!(out, "  Sales overview:  {}", sales.join(", "))?;
    writeln!(out, "  Orders:          {}", summary.order_count)?;
    writeln!(out, "  Open orders:     {}", summary.open_order_count)?;
    writeln!(out, "  Products:        {}", summary.product_count)?;
    writeln!(out, "  Unread messages: {}", summary.unread_messages)?;
    writeln!(out)?;
    writeln!(out, "Recent orders")?;
    for order in summary.recent_orders {
        writeln!(
            out,
            "  {:<8} {:<30} {:>10}  {} ({:?})  {}",
            order.id,
            order.product_name,
            order.total.display(),
            order.status,
            status_tone(order.status),
            short_date(order.date),
        )?;
    }

    tracing::info!(orders = summary.order_count, "Rendered dashboard");
    Ok(())
}

/// Switch to `view` and print the sidebar with the active entry marked.
///
/// # Errors
///
/// Returns `AppError::View` for an unknown view name, or an error if
/// writing fails.
pub fn navigate(
    view: &str,
    product: Option<&str>,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let view: View = view.parse().map_err(AppError::from)?;
    let mut nav = Navigator::default();
    nav.navigate(view, product.map(ProductId::new));

    for item in nav.sidebar_items() {
        if item.section == SidebarSection::Footer && item.view == View::Settings {
            writeln!(out, "  ---")?;
        }
        let marker = if item.active { ">" } else { " " };
        writeln!(out, "{marker} {}", item.label)?;
    }
    writeln!(out)?;
    match nav.selected_product() {
        Some(id) => writeln!(out, "Current view: {} (product {id})", nav.current())?,
        None => writeln!(out, "Current view: {}", nav.current())?,
    }
    Ok(())
}
