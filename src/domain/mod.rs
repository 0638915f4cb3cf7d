pub mod cart;
pub mod catalog;
pub mod model;
pub mod navigation;
pub mod rotation;
