use crate::domain::cart::CartManager;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the cart held at the moment checkout was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReceipt {
    pub total: u64,
    pub line_count: usize,
    pub unit_count: u64,
    pub placed_at: DateTime<Utc>,
}

/// Simulated checkout: always succeeds, empties the cart, and shows a success
/// flag until the delayed reset fires.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSimulator {
    success: bool,
    last_receipt: Option<CheckoutReceipt>,
}

impl CheckoutSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success_shown(&self) -> bool {
        self.success
    }

    pub fn last_receipt(&self) -> Option<&CheckoutReceipt> {
        self.last_receipt.as_ref()
    }

    /// No validation of any kind; an empty cart checks out too.
    pub fn submit(&mut self, cart: &mut CartManager) -> CheckoutReceipt {
        let receipt = CheckoutReceipt {
            total: cart.total(),
            line_count: cart.items().len(),
            unit_count: cart.count(),
            placed_at: Utc::now(),
        };
        cart.clear();
        self.success = true;
        self.last_receipt = Some(receipt.clone());
        receipt
    }

    /// The delayed half of checkout: hide the banner and close the panel.
    pub fn reset(&mut self, cart: &mut CartManager) {
        self.success = false;
        cart.close();
    }
}
