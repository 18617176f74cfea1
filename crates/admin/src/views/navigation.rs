//! Current-view selector for the dashboard shell.
//!
//! Navigation is local to the view layer: it is not part of the shared
//! store, and switching views never notifies store subscribers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marketplace_core::ProductId;

/// Error returned for an unknown view name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view: {0}")]
pub struct ViewParseError(pub String);

/// A screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Dashboard,
    Products,
    ProductDetail,
    Orders,
    Messages,
    Analytics,
    Settings,
    Profile,
}

impl View {
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Products,
        Self::ProductDetail,
        Self::Orders,
        Self::Messages,
        Self::Analytics,
        Self::Settings,
        Self::Profile,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::ProductDetail => "product-detail",
            Self::Orders => "orders",
            Self::Messages => "messages",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
            Self::Profile => "profile",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::ProductDetail => "Product",
            Self::Orders => "Orders",
            Self::Messages => "Messages",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
            Self::Profile => "Profile",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ViewParseError(s.to_owned()))
    }
}

/// Which group of the sidebar an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSection {
    Main,
    Footer,
}

/// One entry of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub view: View,
    pub label: &'static str,
    pub section: SidebarSection,
    pub active: bool,
}

/// The current view plus the product opened in the detail screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: View,
    selected_product: Option<ProductId>,
}

impl Navigator {
    #[must_use]
    pub const fn current(&self) -> View {
        self.current
    }

    #[must_use]
    pub const fn selected_product(&self) -> Option<&ProductId> {
        self.selected_product.as_ref()
    }

    /// Switch views. The product selection is replaced by `product_id`,
    /// so navigating without one clears it.
    pub fn navigate(&mut self, view: View, product_id: Option<ProductId>) {
        tracing::debug!(view = %view, product_id = ?product_id, "Navigating");
        self.current = view;
        self.selected_product = product_id;
    }

    /// Sidebar entries with the active one flagged.
    ///
    /// The product detail screen highlights nothing, since it has no entry.
    #[must_use]
    pub fn sidebar_items(&self) -> Vec<SidebarItem> {
        const MAIN: [View; 5] = [
            View::Dashboard,
            View::Products,
            View::Orders,
            View::Messages,
            View::Analytics,
        ];
        const FOOTER: [View; 2] = [View::Settings, View::Profile];

        let entry = |view: View, section| SidebarItem {
            view,
            label: view.label(),
            section,
            active: view == self.current,
        };

        MAIN.into_iter()
            .map(|view| entry(view, SidebarSection::Main))
            .chain(FOOTER.into_iter().map(|view| entry(view, SidebarSection::Footer)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_dashboard() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), View::Dashboard);
        assert!(nav.selected_product().is_none());
    }

    #[test]
    fn test_navigate_replaces_product_selection() {
        let mut nav = Navigator::default();
        nav.navigate(View::ProductDetail, Some(ProductId::new("2")));
        assert_eq!(nav.current(), View::ProductDetail);
        assert_eq!(nav.selected_product(), Some(&ProductId::new("2")));

        nav.navigate(View::Products, None);
        assert!(nav.selected_product().is_none());
    }

    #[test]
    fn test_view_round_trips_through_str() {
        for view in View::ALL {
            assert_eq!(view.as_str().parse::<View>().unwrap(), view);
        }
        assert_eq!(
            "inventory".parse::<View>(),
            Err(ViewParseError("inventory".to_string()))
        );
    }

    #[test]
    fn test_sidebar_items() {
        let mut nav = Navigator::default();
        nav.navigate(View::Orders, None);
        let items = nav.sidebar_items();

        assert_eq!(items.len(), 7);
        let active: Vec<_> = items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].view, View::Orders);
        assert_eq!(
            items.iter().filter(|i| i.section == SidebarSection::Footer).count(),
            2
        );
    }
}
