//! Cart Line Model

use serde::{Deserialize, Serialize};

use super::Product;

/// A product in the cart together with its quantity
///
/// Invariant: `quantity >= 1` while the line is present. A line whose
/// quantity would reach 0 is removed from the ledger, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// New line for a product entering the cart
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// `price × quantity` for this line
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
