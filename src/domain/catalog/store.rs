use crate::domain::model::{CatalogPayload, PortfolioItem, Product};

/// Holds the fetched catalog.
///
/// Products and portfolio items are only ever replaced together, in a single
/// call, so a reader never observes one collection updated and the other
/// stale.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Vec<Product>,
    portfolio_items: Vec<PortfolioItem>,
    loading: bool,
}

impl CatalogStore {
    /// A store that is waiting on its first fetch.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            portfolio_items: Vec::new(),
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn portfolio_items(&self) -> &[PortfolioItem] {
        &self.portfolio_items
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_portfolio_item(&self, id: &str) -> Option<&PortfolioItem> {
        self.portfolio_items.iter().find(|p| p.id == id)
    }

    /// Marks a (re)fetch as pending. Existing collections stay in place but
    /// must not be rendered while loading.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replaces both collections and clears the loading flag.
    pub fn apply_loaded(&mut self, payload: CatalogPayload) {
        self.products = payload.products;
        self.portfolio_items = payload.portfolio_items;
        self.loading = false;
    }

    /// Clears the loading flag and keeps whatever was loaded before (nothing,
    /// on the first fetch).
    pub fn apply_failed(&mut self) {
        self.loading = false;
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
