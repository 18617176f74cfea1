//! Analytics screen and the dashboard's headline figures.
//!
//! The figures are fixed demo series, not derived from the store, except
//! for the order count which is read from the snapshot.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use marketplace_core::{CurrencyCode, Price};

use crate::filters::{group_thousands, whole_dollars};
use crate::state::StoreState;

/// Sales and order volume for one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySales {
    pub month: &'static str,
    pub sales: Price,
    pub orders: u32,
}

/// Share of revenue taken by a category, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    pub category: &'static str,
    pub percent: u8,
}

/// Units sold of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub name: &'static str,
    pub units_sold: u32,
}

/// A figure with its change against the previous period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: MetricValue,
    /// Period-over-period change in percent.
    pub change: Decimal,
}

impl Metric {
    /// Change formatted with its sign, e.g. `+12.5%`.
    #[must_use]
    pub fn change_label(&self) -> String {
        if self.change.is_sign_negative() {
            format!("{}%", self.change)
        } else {
            format!("+{}%", self.change)
        }
    }
}

/// How a metric's value is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MetricValue {
    Money(Price),
    Count(usize),
    Percent(Decimal),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Money(price) if price.amount.fract().is_zero() => f.pad(&whole_dollars(*price)),
            Self::Money(price) => f.pad(&price.display()),
            Self::Count(count) => f.pad(&group_thousands(&count.to_string())),
            Self::Percent(percent) => f.pad(&format!("{percent}%")),
        }
    }
}

/// Everything the analytics screen charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analytics {
    pub sales_trend: Vec<MonthlySales>,
    pub category_performance: Vec<CategoryShare>,
    pub top_products: Vec<TopProduct>,
    pub key_metrics: Vec<Metric>,
}

impl Default for Analytics {
    fn default() -> Self {
        Self {
            sales_trend: sales_trend(),
            category_performance: category_performance(),
            top_products: top_products(),
            key_metrics: key_metrics(),
        }
    }
}

impl Analytics {
    /// Top products, best seller first.
    #[must_use]
    pub fn ranked_products(&self) -> Vec<TopProduct> {
        let mut ranked = self.top_products.clone();
        ranked.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
        ranked
    }

    /// Sum of monthly sales across the trend.
    #[must_use]
    pub fn total_sales(&self) -> Decimal {
        self.sales_trend.iter().map(|m| m.sales.amount).sum()
    }
}

/// The four stat cards at the top of the dashboard.
///
/// Only the order count comes from the store; the rest are demo figures.
#[must_use]
pub fn headline_stats(state: &StoreState) -> Vec<Metric> {
    vec![
        Metric {
            label: "Total Sales",
            value: MetricValue::Money(Price::usd(Decimal::from(24_500))),
            change: Decimal::new(125, 1),
        },
        Metric {
            label: "Orders",
            value: MetricValue::Count(state.orders.len()),
            change: Decimal::new(82, 1),
        },
        Metric {
            label: "Visitors",
            value: MetricValue::Count(1_234),
            change: Decimal::new(231, 1),
        },
        Metric {
            label: "Conversion",
            value: MetricValue::Percent(Decimal::new(32, 1)),
            change: Decimal::new(24, 1),
        },
    ]
}

fn month(month: &'static str, dollars: i64, orders: u32) -> MonthlySales {
    MonthlySales {
        month,
        sales: Price::usd(Decimal::from(dollars)),
        orders,
    }
}

/// Monthly sales for January through June.
#[must_use]
pub fn sales_trend() -> Vec<MonthlySales> {
    vec![
        month("Jan", 4_000, 240),
        month("Feb", 3_000, 198),
        month("Mar", 5_000, 320),
        month("Apr", 4_500, 280),
        month("May", 6_000, 390),
        month("Jun", 5_500, 350),
    ]
}

fn category_performance() -> Vec<CategoryShare> {
    [("Electronics", 45), ("Furniture", 25), ("Clothing", 20), ("Books", 10)]
        .into_iter()
        .map(|(category, percent)| CategoryShare { category, percent })
        .collect()
}

fn top_products() -> Vec<TopProduct> {
    [
        ("Wireless Headphones", 145),
        ("Fitness Watch", 98),
        ("Office Chair", 76),
        ("Bluetooth Speaker", 203),
    ]
    .into_iter()
    .map(|(name, units_sold)| TopProduct { name, units_sold })
    .collect()
}

fn key_metrics() -> Vec<Metric> {
    vec![
        Metric {
            label: "Average Order Value",
            value: MetricValue::Money(Price::from_cents(15_650, CurrencyCode::USD)),
            change: Decimal::new(153, 1),
        },
        Metric {
            label: "Conversion Rate",
            value: MetricValue::Percent(Decimal::new(32, 1)),
            change: Decimal::new(24, 1),
        },
        Metric {
            label: "Customer Retention",
            value: MetricValue::Percent(Decimal::from(68)),
            change: Decimal::new(51, 1),
        },
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::seed::seed_state;

    #[test]
    fn test_sales_trend_covers_six_months() {
        let analytics = Analytics::default();
        let months: Vec<_> = analytics.sales_trend.iter().map(|m| m.month).collect();
        assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(analytics.total_sales(), Decimal::from(28_000));
        assert_eq!(analytics.sales_trend[4].orders, 390);
    }

    #[test]
    fn test_category_shares_sum_to_hundred() {
        let analytics = Analytics::default();
        let total: u32 = analytics
            .category_performance
            .iter()
            .map(|c| u32::from(c.percent))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_ranked_products() {
        let ranked = Analytics::default().ranked_products();
        assert_eq!(ranked[0].name, "Bluetooth Speaker");
        assert_eq!(ranked.last().unwrap().units_sold, 76);
    }

    #[test]
    fn test_key_metric_formatting() {
        let metrics = Analytics::default().key_metrics;
        assert_eq!(metrics[0].value.to_string(), "$156.50");
        assert_eq!(metrics[0].change_label(), "+15.3%");
        assert_eq!(metrics[2].value.to_string(), "68%");
    }

    #[test]
    fn test_headline_stats_read_order_count() {
        let mut state = seed_state();
        let stats = headline_stats(&state);
        let labels: Vec<_> = stats.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Total Sales", "Orders", "Visitors", "Conversion"]);
        assert_eq!(stats[0].value.to_string(), "$24,500");
        assert_eq!(stats[1].value.to_string(), "4");
        assert_eq!(stats[2].value.to_string(), "1,234");
        assert_eq!(stats[3].value.to_string(), "3.2%");

        state.orders.truncate(1);
        assert_eq!(headline_stats(&state)[1].value, MetricValue::Count(1));
    }

    #[test]
    fn test_negative_change_label() {
        let metric = Metric {
            label: "Returns",
            value: MetricValue::Count(3),
            change: Decimal::new(-15, 1),
        };
        assert_eq!(metric.change_label(), "-1.5%");
    }
}
