//! Order list and detail commands.

use std::io::Write;

use marketplace_admin::filters::{capitalize, short_date, status_tone};
use marketplace_admin::views::{StatusCounts, StatusFilter, filter_orders, order_detail};
use marketplace_admin::{AppError, MarketplaceStore};
use marketplace_core::{OrderId, OrderStatus};

/// Print the orders under one status tab, with every tab's count.
///
/// # Errors
///
/// Returns `AppError::Status` if `status` is not a known tab, or an error if
/// writing fails.
pub fn list(
    store: &MarketplaceStore,
    status: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter: StatusFilter = status.parse().map_err(AppError::from)?;
    let state = store.snapshot();
    let counts = StatusCounts::tally(&state.orders);

    let tabs: Vec<String> = std::iter::once(StatusFilter::All)
        .chain(OrderStatus::ALL.into_iter().map(StatusFilter::Only))
        .map(|tab| {
            let marker = if tab == filter { "*" } else { "" };
            format!("{marker}{tab} ({})", counts.for_filter(tab))
        })
        .collect();
    writeln!(out, "{}", tabs.join("  "))?;

    let orders = filter_orders(state, filter);
    for order in &orders {
        writeln!(
            out,
            "{:<8} {:<30} {:<16} {:>10} {:>10}  {}",
            order.id,
            order.product_name,
            order.customer,
            short_date(order.date),
            order.total.display(),
            order.status,
        )?;
    }

    tracing::info!(filter = %filter, shown = orders.len(), "Listed orders");
    Ok(())
}

/// Print the order detail dialog.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no order has this ID.
pub fn show(
    store: &MarketplaceStore,
    id: &str,
    out: &mut impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = order_detail(store.snapshot(), &OrderId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("order {id}")))?;

    writeln!(out, "Order {}", order.id)?;
    writeln!(out, "  Customer: {}", order.customer)?;
    writeln!(out, "  Product:  {}", order.product_name)?;
    writeln!(out, "  Total:    {}", order.total.display())?;
    writeln!(out, "  Date:     {}", short_date(order.date))?;
    writeln!(
        out,
        "  Status:   {} ({:?})",
        capitalize(order.status.as_str()),
        status_tone(order.status)
    )?;
    Ok(())
}
