//! API Response wrapper
//!
//! Uniform response envelope for every Tauri command, aligned with the
//! frontend's `ApiResponse<T>` type. Numeric codes come from
//! `shared::error::ErrorCode`; domain and print-bridge errors map to the
//! most specific code available.

use serde::Serialize;

use checkout_core::CheckoutError;
use shared::error::ErrorCode;

use super::print_bridge::PrintBridgeError;

/// Uniform command response
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Error code (0 = success)
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success with payload
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Error with an explicit code and message
    pub fn error_with_code(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// Error response from a checkout engine failure
    pub fn from_checkout_error(err: CheckoutError) -> Self {
        Self {
            code: checkout_error_to_code(&err).code(),
            message: err.to_string(),
            data: None,
        }
    }

    /// Error response from a print bridge failure
    pub fn from_print_error(err: PrintBridgeError) -> Self {
        Self {
            code: print_error_to_code(&err).code(),
            message: err.to_string(),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Success without payload
    pub fn ok() -> Self {
        Self {
            code: ErrorCode::Success.code(),
            message: "success".to_string(),
            data: None,
        }
    }
}

/// Map a checkout error to the most specific ErrorCode
fn checkout_error_to_code(err: &CheckoutError) -> ErrorCode {
    match err {
        CheckoutError::InvalidCoupon { .. } => ErrorCode::InvalidCoupon,
        CheckoutError::EmptyCart => ErrorCode::EmptyCart,
        CheckoutError::Storage(_) => ErrorCode::StorageError,
    }
}

/// Map a print bridge error to the most specific ErrorCode
fn print_error_to_code(err: &PrintBridgeError) -> ErrorCode {
    match err {
        PrintBridgeError::NoPrinters => ErrorCode::NoPrinters,
        PrintBridgeError::LoadFailed(_) => ErrorCode::ReceiptLoadFailed,
        PrintBridgeError::PrintFailed(_) => ErrorCode::PrintDialogFailed,
        PrintBridgeError::Timeout => ErrorCode::PrintTimeout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, 0);
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_checkout_error_mapping() {
        let response = ApiResponse::<()>::from_checkout_error(CheckoutError::EmptyCart);
        assert_eq!(response.code, ErrorCode::EmptyCart.code());
        assert!(response.data.is_none());

        let response = ApiResponse::<()>::from_checkout_error(CheckoutError::InvalidCoupon {
            code: "NOPE".to_string(),
        });
        assert_eq!(response.code, ErrorCode::InvalidCoupon.code());
        assert!(response.message.contains("NOPE"));
    }

    #[test]
    fn test_print_error_mapping() {
        let response = ApiResponse::<()>::from_print_error(PrintBridgeError::NoPrinters);
        assert_eq!(response.code, ErrorCode::NoPrinters.code());

        let response = ApiResponse::<()>::from_print_error(PrintBridgeError::Timeout);
        assert_eq!(response.code, ErrorCode::PrintTimeout.code());
    }

    #[test]
    fn test_error_envelope_skips_data_field() {
        let response = ApiResponse::<u32>::error_with_code(ErrorCode::OrderNotFound, "gone");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 3002);
        assert_eq!(json["message"], "gone");
        assert!(json.get("data").is_none());
    }
}
