//! Error codes for the checkout stack
//!
//! Every Tauri command reports failures to the UI as a numeric code plus a
//! human-readable message. Codes are grouped by domain so the frontend can
//! route them without string matching.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Catalog/cart errors
//! - 2xxx: Coupon errors
//! - 3xxx: Checkout/order errors
//! - 4xxx: Printing errors
//! - 9xxx: Storage errors

use serde::{Deserialize, Serialize};

/// Standardized error codes returned in `ApiResponse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,
    Unknown = 1,
    InvalidRequest = 2,

    // Catalog / cart
    ProductNotFound = 1001,
    BarcodeNotFound = 1002,

    // Coupon
    InvalidCoupon = 2001,

    // Checkout / orders
    EmptyCart = 3001,
    OrderNotFound = 3002,

    // Printing
    NoPrinters = 4001,
    ReceiptLoadFailed = 4002,
    PrintDialogFailed = 4003,
    PrintTimeout = 4004,

    // Storage
    StorageError = 9001,
}

impl ErrorCode {
    /// Numeric code sent over the wire
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message when the caller has nothing more specific
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::InvalidRequest => "Invalid request",
            Self::ProductNotFound => "Product not found",
            Self::BarcodeNotFound => "No product with this barcode",
            Self::InvalidCoupon => "Invalid coupon code",
            Self::EmptyCart => "Cart is empty",
            Self::OrderNotFound => "Order not found",
            Self::NoPrinters => "No printers available",
            Self::ReceiptLoadFailed => "Failed to load receipt document",
            Self::PrintDialogFailed => "Print dialog failed",
            Self::PrintTimeout => "Timed out waiting for receipt document",
            Self::StorageError => "Storage error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::InvalidCoupon.code(), 2001);
        assert_eq!(ErrorCode::EmptyCart.code(), 3001);
        assert_eq!(ErrorCode::NoPrinters.code(), 4001);
        assert_eq!(ErrorCode::StorageError.code(), 9001);
    }

    #[test]
    fn test_every_code_has_a_message() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::InvalidRequest,
            ErrorCode::ProductNotFound,
            ErrorCode::BarcodeNotFound,
            ErrorCode::InvalidCoupon,
            ErrorCode::EmptyCart,
            ErrorCode::OrderNotFound,
            ErrorCode::NoPrinters,
            ErrorCode::ReceiptLoadFailed,
            ErrorCode::PrintDialogFailed,
            ErrorCode::PrintTimeout,
            ErrorCode::StorageError,
        ];
        for code in codes {
            assert!(!code.default_message().is_empty());
        }
    }
}
