//! Product list filtering and the product detail lookup.

use std::fmt;

use marketplace_core::ProductId;

use crate::filters::capitalize;
use crate::models::Product;
use crate::state::StoreState;

/// Category dropdown value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (any case) selects every category; anything else is an exact label.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => &product.category == category,
        }
    }

    /// Dropdown label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "All".to_owned(),
            Self::Only(category) => capitalize(category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Search box and category dropdown of the product list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub search: String,
    pub category: CategoryFilter,
}

impl ProductQuery {
    /// Whether any filter narrows the list.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        product.name_matches(&self.search) && self.category.matches(product)
    }

    /// Products passing both filters, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, state: &'a StoreState) -> Vec<&'a Product> {
        state.products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Hint shown when the list is empty.
    #[must_use]
    pub fn empty_hint(&self) -> &'static str {
        if self.is_filtered() {
            "Try adjusting your filters"
        } else {
            "Get started by adding your first product"
        }
    }
}

/// Dropdown options: `All` followed by each category in first-seen order.
#[must_use]
pub fn categories(state: &StoreState) -> Vec<CategoryFilter> {
    let mut seen: Vec<&str> = Vec::new();
    for product in &state.products {
        if !seen.contains(&product.category.as_str()) {
            seen.push(&product.category);
        }
    }

    std::iter::once(CategoryFilter::All)
        .chain(seen.into_iter().map(|c| CategoryFilter::Only(c.to_owned())))
        .collect()
}

/// Product shown on the detail screen, if it still exists.
#[must_use]
pub fn product_detail<'a>(state: &'a StoreState, id: &ProductId) -> Option<&'a Product> {
    state.product(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::seed_state;

    #[test]
    fn test_unfiltered_query_returns_catalog() {
        let state = seed_state();
        let query = ProductQuery::default();
        assert!(!query.is_filtered());
        assert_eq!(query.apply(&state).len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = seed_state();
        let query = ProductQuery {
            search: "WATCH".to_string(),
            ..ProductQuery::default()
        };
        let hits = query.apply(&state);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Smart Fitness Watch");
    }

    #[test]
    fn test_category_filter_and_search_combine() {
        let state = seed_state();
        let query = ProductQuery {
            search: "o".to_string(),
            category: CategoryFilter::parse("Furniture"),
        };
        let hits = query.apply(&state);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProductId::new("3"));
    }

    #[test]
    fn test_no_hits_hint() {
        let state = seed_state();
        let query = ProductQuery {
            search: "kayak".to_string(),
            ..ProductQuery::default()
        };
        assert!(query.apply(&state).is_empty());
        assert_eq!(query.empty_hint(), "Try adjusting your filters");
        assert_eq!(
            ProductQuery::default().empty_hint(),
            "Get started by adding your first product"
        );
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let state = seed_state();
        let labels: Vec<String> = categories(&state).iter().map(CategoryFilter::label).collect();
        assert_eq!(labels, vec!["All", "Electronics", "Furniture"]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Books"),
            CategoryFilter::Only("Books".to_string())
        );
    }

    #[test]
    fn test_product_detail_missing() {
        let state = seed_state();
        assert!(product_detail(&state, &ProductId::new("1")).is_some());
        assert!(product_detail(&state, &ProductId::new("nope")).is_none());
    }
}
