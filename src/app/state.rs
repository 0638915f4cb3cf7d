//! The single application-state container.
//!
//! Each slice is owned by its component. Outside the crate the state is read
//! through accessors and written only through `StorefrontState::apply`.

use crate::app::assistant::DesignAssistantSession;
use crate::app::checkout::{CheckoutReceipt, CheckoutSimulator};
use crate::domain::cart::CartManager;
use crate::domain::catalog::views::{filtered_portfolio, filtered_products};
use crate::domain::catalog::{CatalogStore, FilterState, HomeSections, Loadable};
use crate::domain::model::{format_price, CartItem, PortfolioItem, Product};
use crate::domain::navigation::{LegalSection, PageMetadata, View, ViewRouter};
use crate::domain::rotation::{Carousel, HERO_SLIDES, PORTFOLIO_HERO_SLIDES};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct StorefrontState {
    pub(crate) catalog: CatalogStore,
    pub(crate) filters: FilterState,
    pub(crate) cart: CartManager,
    pub(crate) router: ViewRouter,
    pub(crate) hero: Carousel,
    pub(crate) portfolio_hero: Carousel,
    pub(crate) assistant: DesignAssistantSession,
    pub(crate) checkout: CheckoutSimulator,
    pub(crate) selected_project: Option<PortfolioItem>,
    pub(crate) search_open: bool,
}

impl StorefrontState {
    pub fn new() -> Self {
        Self {
            catalog: CatalogStore::new(),
            filters: FilterState::default(),
            cart: CartManager::new(),
            router: ViewRouter::new(),
            hero: Carousel::new(HERO_SLIDES.len()),
            portfolio_hero: Carousel::new(PORTFOLIO_HERO_SLIDES.len()),
            assistant: DesignAssistantSession::new(),
            checkout: CheckoutSimulator::new(),
            selected_project: None,
            search_open: false,
        }
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn router(&self) -> &ViewRouter {
        &self.router
    }

    pub fn current_view(&self) -> View {
        self.router.current()
    }

    pub fn legal_section(&self) -> LegalSection {
        self.router.legal_section()
    }

    pub fn hero_index(&self) -> usize {
        self.hero.index()
    }

    pub fn portfolio_hero_index(&self) -> usize {
        self.portfolio_hero.index()
    }

    pub fn assistant(&self) -> &DesignAssistantSession {
        &self.assistant
    }

    pub fn checkout(&self) -> &CheckoutSimulator {
        &self.checkout
    }

    pub fn selected_project(&self) -> Option<&PortfolioItem> {
        self.selected_project.as_ref()
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn cart_total(&self) -> u64 {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    pub fn filtered_products(&self) -> Loadable<Vec<Product>> {
        if self.catalog.is_loading() {
            return Loadable::Loading;
        }
        Loadable::Ready(
            filtered_products(self.catalog.products(), &self.filters)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub fn filtered_portfolio(&self) -> Loadable<Vec<PortfolioItem>> {
        if self.catalog.is_loading() {
            return Loadable::Loading;
        }
        Loadable::Ready(
            filtered_portfolio(self.catalog.portfolio_items(), self.filters.portfolio_filter)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    pub fn home_sections(&self) -> Loadable<HomeSections> {
        if self.catalog.is_loading() {
            return Loadable::Loading;
        }
        Loadable::Ready(HomeSections::derive(
            self.catalog.products(),
            self.catalog.portfolio_items(),
        ))
    }

    pub fn snapshot(&self) -> StorefrontSnapshot {
        StorefrontSnapshot {
            view: self.router.current(),
            legal_section: self.router.legal_section(),
            metadata: self.router.metadata(),
            filters: self.filters.clone(),
            catalog_loading: self.catalog.is_loading(),
            product_count: self.catalog.products().len(),
            portfolio_count: self.catalog.portfolio_items().len(),
            cart_items: self.cart.items().to_vec(),
            cart_total: self.cart.total(),
            cart_total_label: format_price(self.cart.total()),
            cart_count: self.cart.count(),
            cart_open: self.cart.is_open(),
            search_open: self.search_open,
            order_success: self.checkout.is_success_shown(),
            last_receipt: self.checkout.last_receipt().cloned(),
            hero_index: self.hero.index(),
            portfolio_hero_index: self.portfolio_hero.index(),
            selected_project: self.selected_project.clone(),
            assistant: self.assistant.clone(),
        }
    }
}

impl Default for StorefrontState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only copy of the whole state, for hosts to render from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSnapshot {
    pub view: View,
    pub legal_section: LegalSection,
    pub metadata: &'static PageMetadata,
    pub filters: FilterState,
    pub catalog_loading: bool,
    pub product_count: usize,
    pub portfolio_count: usize,
    pub cart_items: Vec<CartItem>,
    pub cart_total: u64,
    pub cart_total_label: String,
    pub cart_count: u64,
    pub cart_open: bool,
    pub search_open: bool,
    pub order_success: bool,
    pub last_receipt: Option<CheckoutReceipt>,
    pub hero_index: usize,
    pub portfolio_hero_index: usize,
    pub selected_project: Option<PortfolioItem>,
    pub assistant: DesignAssistantSession,
}
