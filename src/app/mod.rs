pub mod assistant;
pub mod checkout;
pub mod reducer;
pub mod state;
pub mod storefront_service;
