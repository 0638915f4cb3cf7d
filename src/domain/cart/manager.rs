use crate::domain::model::{CartItem, Product};

/// Owns the cart lines and the cart panel's visibility.
///
/// Invariants held by every operation:
/// - at most one line per product id (adds merge into the existing line);
/// - every line has quantity >= 1.
///
/// The line list is never handed out mutably.
#[derive(Debug, Clone, Default)]
pub struct CartManager {
    items: Vec<CartItem>,
    open: bool,
}

impl CartManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Adds one unit of `product`, or starts a new line at the product's
    /// minimum quantity. Always opens the panel.
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(1),
            None => self.items.push(CartItem {
                product: product.clone(),
                quantity: product.initial_quantity(),
            }),
        }
        self.open = true;
    }

    /// Removes the line for `id`. Returns whether a line was removed; an
    /// unknown id is not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Shifts the quantity of `id` by `delta`, never below 1. Returns the new
    /// quantity, or `None` if no such line exists.
    pub fn update_quantity(&mut self, id: &str, delta: i64) -> Option<u32> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        let next = i64::from(item.quantity)
            .saturating_add(delta)
            .clamp(1, i64::from(u32::MAX));
        // clamped into u32 range above
        item.quantity = next as u32;
        Some(item.quantity)
    }

    /// Sum of price x quantity over all lines, computed on every call.
    pub fn total(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Sum of quantities (the navigation badge), not the number of lines.
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Empties the cart, handing back the removed lines.
    pub fn clear(&mut self) -> Vec<CartItem> {
        std::mem::take(&mut self.items)
    }
}
