pub mod manager;

pub use manager::CartManager;
