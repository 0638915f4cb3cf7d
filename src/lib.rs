pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::reducer::{StorefrontAction, StorefrontEffect};
pub use app::state::{StorefrontSnapshot, StorefrontState};
pub use app::storefront_service::StorefrontService;
pub use domain::model::{
    CartItem, CatalogPayload, Category, CategoryFilter, DesignSuggestion, PortfolioCategory,
    PortfolioFilter, PortfolioItem, Product,
};
pub use domain::navigation::{LegalSection, View};
pub use infra::config::StorefrontConfig;
