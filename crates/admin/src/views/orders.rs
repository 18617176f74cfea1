//! Order list with status tabs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use marketplace_core::{OrderId, OrderStatus, StatusParseError};

use crate::models::Order;
use crate::state::StoreState;

/// Status tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => order.status == *status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

/// Orders shown under a tab, in stored order.
#[must_use]
pub fn filter_orders(state: &StoreState, filter: StatusFilter) -> Vec<&Order> {
    state.orders.iter().filter(|o| filter.matches(o)).collect()
}

/// Order being inspected in the detail dialog, if it exists.
#[must_use]
pub fn order_detail<'a>(state: &'a StoreState, id: &OrderId) -> Option<&'a Order> {
    state.order(id)
}

/// Tab badge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    #[must_use]
    pub fn tally(orders: &[Order]) -> Self {
        orders.iter().fold(
            Self {
                all: orders.len(),
                ..Self::default()
            },
            |mut counts, order| {
                match order.status {
                    OrderStatus::Pending => counts.pending += 1,
                    OrderStatus::Processing => counts.processing += 1,
                    OrderStatus::Shipped => counts.shipped += 1,
                    OrderStatus::Delivered => counts.delivered += 1,
                    OrderStatus::Cancelled => counts.cancelled += 1,
                }
                counts
            },
        )
    }

    /// Badge count for a tab.
    #[must_use]
    pub const fn for_filter(&self, filter: StatusFilter) -> usize {
        match filter {
            StatusFilter::All => self.all,
            StatusFilter::Only(OrderStatus::Pending) => self.pending,
            StatusFilter::Only(OrderStatus::Processing) => self.processing,
            StatusFilter::Only(OrderStatus::Shipped) => self.shipped,
            StatusFilter::Only(OrderStatus::Delivered) => self.delivered,
            StatusFilter::Only(OrderStatus::Cancelled) => self.cancelled,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::seed::seed_state;

    #[test]
    fn test_filter_all() {
        let state = seed_state();
        assert_eq!(filter_orders(&state, StatusFilter::All).len(), 4);
    }

    #[test]
    fn test_filter_by_status() {
        let state = seed_state();
        let shipped = filter_orders(&state, StatusFilter::Only(OrderStatus::Shipped));
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].id, OrderId::new("ORD-002"));

        assert!(filter_orders(&state, StatusFilter::Only(OrderStatus::Cancelled)).is_empty());
    }

    #[test]
    fn test_status_counts() {
        let state = seed_state();
        let counts = StatusCounts::tally(&state.orders);
        assert_eq!(
            counts,
            StatusCounts {
                all: 4,
                pending: 1,
                processing: 1,
                shipped: 1,
                delivered: 1,
                cancelled: 0,
            }
        );
        assert_eq!(counts.for_filter(StatusFilter::All), 4);
    }

    #[test]
    fn test_status_filter_from_str() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "delivered".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(OrderStatus::Delivered)
        );
        assert!("lost".parse::<StatusFilter>().is_err());
        assert_eq!(StatusFilter::Only(OrderStatus::Pending).to_string(), "pending");
    }

    #[test]
    fn test_order_detail() {
        let state = seed_state();
        let order = order_detail(&state, &OrderId::new("ORD-003")).unwrap();
        assert_eq!(order.customer, "Bob Johnson");
        assert!(order_detail(&state, &OrderId::new("ORD-999")).is_none());
    }
}
