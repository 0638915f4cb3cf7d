pub mod router;
pub mod types;
pub mod handlers {
    pub mod assistant;
    pub mod cart;
    pub mod catalog;
    pub mod common;
    pub mod health;
    pub mod navigation;
    pub mod showcase;
    pub mod state;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
