//! View-layer read models.
//!
//! Nothing here renders. Each module turns a [`StoreState`](crate::state::StoreState)
//! (plus whatever state is local to that screen) into plain data, and routes
//! user actions to store operations.

pub mod analytics;
pub mod dashboard;
pub mod messages;
pub mod navigation;
pub mod orders;
pub mod product_drawer;
pub mod products;

pub use analytics::{Analytics, Metric, MetricValue, headline_stats};
pub use dashboard::DashboardSummary;
pub use messages::{Inbox, send_message};
pub use navigation::{Navigator, View};
pub use orders::{StatusCounts, StatusFilter, filter_orders, order_detail};
pub use product_drawer::{ProductForm, ProductFormError, Submitted};
pub use products::{CategoryFilter, ProductQuery, categories};
