//! Catalog storage and the pure derivations computed from it.

pub mod store;
pub mod views;

pub use store::CatalogStore;
pub use views::{FilterState, HomeSections, Loadable};
