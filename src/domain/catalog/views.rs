//! Derived views over the catalog.
//!
//! All functions here are pure and recompute from their inputs on every call;
//! nothing is cached.

use crate::domain::model::{CategoryFilter, PortfolioFilter, PortfolioItem, Product};
use serde::{Deserialize, Serialize};

pub const FEATURED_PRODUCT_COUNT: usize = 4;
pub const FEATURED_DESIGN_COUNT: usize = 3;
/// Second showcase slice on the home page: indices 4..7 of the portfolio.
pub const EXTRA_FEATURED_RANGE: std::ops::Range<usize> = 4..7;
pub const SPOTLIGHT_INDEX: usize = 3;

/// Filter and search selections. Independent of the current view and kept
/// across view switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub selected_category: CategoryFilter,
    /// Stored exactly as typed; normalised only when matching.
    pub search_query: String,
    pub portfolio_filter: PortfolioFilter,
}

/// Whether `product` matches a search query (case-insensitive substring of
/// name or description). A blank query matches everything.
pub fn matches_search(product: &Product, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

pub fn filtered_products<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| filters.selected_category.matches(p.category))
        .filter(|p| matches_search(p, &filters.search_query))
        .collect()
}

pub fn filtered_portfolio<'a>(
    items: &'a [PortfolioItem],
    filter: PortfolioFilter,
) -> Vec<&'a PortfolioItem> {
    items.iter().filter(|i| filter.matches(i.category)).collect()
}

/// First four products in catalog order.
pub fn featured_products(products: &[Product]) -> &[Product] {
    &products[..products.len().min(FEATURED_PRODUCT_COUNT)]
}

/// First three portfolio items.
pub fn featured_designs(items: &[PortfolioItem]) -> &[PortfolioItem] {
    &items[..items.len().min(FEATURED_DESIGN_COUNT)]
}

/// Items at indices 4 through 6. Empty when the portfolio has fewer than five
/// items; never wraps.
pub fn extra_featured(items: &[PortfolioItem]) -> &[PortfolioItem] {
    let start = EXTRA_FEATURED_RANGE.start.min(items.len());
    let end = EXTRA_FEATURED_RANGE.end.min(items.len());
    &items[start..end]
}

/// The fourth product, if the catalog has one. Callers omit the spotlight
/// section on `None`; there is no fallback product.
pub fn spotlight_product(products: &[Product]) -> Option<&Product> {
    products.get(SPOTLIGHT_INDEX)
}

/// Content that depends on the catalog: either still loading, or ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "content", rename_all = "snake_case")]
pub enum Loadable<T> {
    Loading,
    Ready(T),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Loadable::Loading => None,
            Loadable::Ready(v) => Some(v),
        }
    }
}

/// Everything the home view shows from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSections {
    pub featured_products: Vec<Product>,
    pub featured_designs: Vec<PortfolioItem>,
    pub extra_featured: Vec<PortfolioItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotlight_product: Option<Product>,
}

impl HomeSections {
    pub fn derive(products: &[Product], portfolio: &[PortfolioItem]) -> Self {
        Self {
            featured_products: featured_products(products).to_vec(),
            featured_designs: featured_designs(portfolio).to_vec(),
            extra_featured: extra_featured(portfolio).to_vec(),
            spotlight_product: spotlight_product(products).cloned(),
        }
    }
}
