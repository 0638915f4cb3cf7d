//! Catalog entities and the values that flow between components.
//!
//! Everything here is plain data: products and portfolio items are immutable
//! after the catalog fetch, and components exchange them by value.

use serde::{Deserialize, Serialize};

pub mod portfolio;
pub mod product;
pub mod suggestion;

pub use portfolio::{PortfolioCategory, PortfolioFilter, PortfolioItem};
pub use product::{format_price, Category, CategoryFilter, Product};
pub use suggestion::DesignSuggestion;

/// A product placed in the cart, with its ordered quantity (always >= 1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> &str {
        &self.product.id
    }

    pub fn line_total(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Body of the static catalog resource. Absent keys mean empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub portfolio_items: Vec<PortfolioItem>,
}
