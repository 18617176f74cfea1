//! Analytics command.

use std::io::Write;

use marketplace_admin::views::Analytics;

/// Print the sales trend, category shares, best sellers and key metrics.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn show(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let analytics = Analytics::default();

    writeln!(out, "Sales & orders trend")?;
    for month in &analytics.sales_trend {
        writeln!(
            out,
            "  {:<4} {:>10} {:>5} orders",
            month.month,
            month.sales.display(),
            month.orders
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Category performance")?;
    for share in &analytics.category_performance {
        writeln!(out, "  {:<12} {:>3}%", share.category, share.percent)?;
    }

    writeln!(out)?;
    writeln!(out, "Top selling products")?;
    for product in analytics.ranked_products() {
        writeln!(out, "  {:<20} {:>5}", product.name, product.units_sold)?;
    }

    writeln!(out)?;
    writeln!(out, "Key metrics")?;
    for metric in &analytics.key_metrics {
        writeln!(
            out,
            "  {:<20} {:>8}  {}",
            metric.label,
            metric.value,
            metric.change_label()
        )?;
    }

    tracing::info!(months = analytics.sales_trend.len(), "Rendered analytics");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_show_lists_best_seller_first() {
        let mut out = Vec::new();
        show(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let speaker = text.find("Bluetooth Speaker").unwrap();
        let chair = text.find("Office Chair").unwrap();
        assert!(speaker < chair);
        assert!(text.contains("$6000.00"));
        assert!(text.contains("Electronics   45%"));
        assert!(text.contains("+5.1%"));
    }
}
