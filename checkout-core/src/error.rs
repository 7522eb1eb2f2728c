//! Error types for the checkout engine

use thiserror::Error;

use crate::storage::StorageError;

/// Checkout engine errors
///
/// Every variant is recoverable: the operation that raised it leaves prior
/// session state unchanged.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Coupon code does not match any entry in the coupon table
    #[error("Invalid coupon code: {code}")]
    InvalidCoupon { code: String },

    /// Checkout attempted with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Durable session storage failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
