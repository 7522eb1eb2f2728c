//! Coupon Model

use serde::{Deserialize, Serialize};

/// Discount carried by a coupon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDiscount {
    /// Fractional rate in (0, 1), e.g. 0.10 for 10% off the subtotal
    Percentage(f64),
    /// Absolute amount off, clamped to the subtotal when applied
    Flat(f64),
}

impl CouponDiscount {
    /// Discount amount for a cart subtotal.
    ///
    /// Percentage discounts are never clamped (rate < 1 keeps them below the
    /// subtotal); flat discounts are clamped so the final total can never go
    /// negative. The asymmetry is deliberate.
    pub fn amount(&self, subtotal: f64) -> f64 {
        match *self {
            Self::Percentage(rate) => subtotal * rate,
            Self::Flat(amount) => amount.min(subtotal),
        }
    }
}

/// Entry in the static coupon table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coupon {
    /// Canonical upper-case code
    pub code: String,
    pub discount: CouponDiscount,
    /// Short human-readable description, e.g. "10% off"
    pub description: String,
}
