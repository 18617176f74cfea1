//! Dashboard summary.

use serde::Serialize;

use crate::models::Order;
use crate::state::StoreState;
use crate::views::analytics::{Metric, MonthlySales, headline_stats, sales_trend};

/// Headline figures and the most recent orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary<'a> {
    /// Stat cards shown above everything else.
    pub stats: Vec<Metric>,
    /// Sales overview chart.
    pub sales: Vec<MonthlySales>,
    pub order_count: usize,
    pub open_order_count: usize,
    pub product_count: usize,
    pub unread_messages: u32,
    pub recent_orders: &'a [Order],
}

impl<'a> DashboardSummary<'a> {
    /// Summarise `state`, listing at most `recent_limit` orders in the
    /// order they are stored.
    #[must_use]
    pub fn build(state: &'a StoreState, recent_limit: usize) -> Self {
        let recent = state.orders.len().min(recent_limit);
        Self {
            stats: headline_stats(state),
            sales: sales_trend(),
            order_count: state.orders.len(),
            open_order_count: state.orders.iter().filter(|o| o.is_open()).count(),
            product_count: state.products.len(),
            unread_messages: state.unread_total(),
            recent_orders: state.orders.get(..recent).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_state;

    #[test]
    fn test_summary_from_seed() {
        let state = seed_state();
        let summary = DashboardSummary::build(&state, 5);

        assert_eq!(summary.order_count, 4);
        assert_eq!(summary.open_order_count, 3);
        assert_eq!(summary.product_count, 4);
        assert_eq!(summary.unread_messages, 1);
        assert_eq!(summary.recent_orders.len(), 4);
        assert_eq!(summary.stats.len(), 4);
        assert_eq!(summary.sales.len(), 6);
    }

    #[test]
    fn test_recent_orders_limit() {
        let state = seed_state();
        let summary = DashboardSummary::build(&state, 2);
        assert_eq!(summary.recent_orders.len(), 2);
        assert_eq!(summary.recent_orders[0].id.as_str(), "ORD-001");
    }
}
