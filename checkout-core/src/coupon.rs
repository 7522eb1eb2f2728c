//! Coupon evaluation
//!
//! Static coupon table; codes are canonicalized to upper-case before
//! lookup. At most one coupon is active per cart, and applying a new one
//! replaces the prior without an explicit removal.

use serde::{Deserialize, Serialize};

use shared::models::{Coupon, CouponDiscount};

use crate::error::{CheckoutError, CheckoutResult};

/// A coupon applied to the current cart, with its discount amount fixed at
/// apply time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedCoupon {
    pub code: String,
    /// Discount amount computed from the subtotal at apply time
    pub amount: f64,
}

/// The static coupon table
#[derive(Debug, Clone)]
pub struct CouponBook {
    coupons: Vec<Coupon>,
}

impl CouponBook {
    pub fn new(coupons: Vec<Coupon>) -> Self {
        Self { coupons }
    }

    /// The built-in coupon table
    pub fn builtin() -> Self {
        Self::new(vec![
            coupon("SAVE10", CouponDiscount::Percentage(0.10), "10% off"),
            coupon("SAVE20", CouponDiscount::Percentage(0.20), "20% off"),
            coupon("FIRST5", CouponDiscount::Flat(5.0), "$5 off"),
            coupon("WELCOME", CouponDiscount::Percentage(0.15), "15% off"),
        ])
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    /// Look up a code, canonicalizing to upper-case first
    pub fn lookup(&self, code: &str) -> Option<&Coupon> {
        let canonical = canonicalize(code);
        self.coupons.iter().find(|c| c.code == canonical)
    }

    /// Evaluate a code against a cart subtotal.
    ///
    /// Fails with [`CheckoutError::InvalidCoupon`] for unknown codes; the
    /// caller's applied-coupon state must stay untouched in that case.
    pub fn evaluate(&self, code: &str, subtotal: f64) -> CheckoutResult<AppliedCoupon> {
        let canonical = canonicalize(code);
        let coupon = self
            .lookup(&canonical)
            .ok_or(CheckoutError::InvalidCoupon { code: canonical })?;
        Ok(AppliedCoupon {
            code: coupon.code.clone(),
            amount: coupon.discount.amount(subtotal),
        })
    }
}

impl Default for CouponBook {
    fn default() -> Self {
        Self::builtin()
    }
}

fn canonicalize(code: &str) -> String {
    code.trim().to_uppercase()
}

fn coupon(code: &str, discount: CouponDiscount, description: &str) -> Coupon {
    Coupon {
        code: code.to_string(),
        discount,
        description: description.to_string(),
    }
}
