//! Coupon Commands

use tauri::State;

use crate::commands::cart::{cart_data, CartData};
use crate::core::response::ApiResponse;
use crate::SessionState;

/// Apply a coupon code to the current cart. An unknown code is rejected
/// with `InvalidCoupon` and leaves any active coupon untouched; a valid
/// code replaces it.
#[tauri::command]
pub async fn apply_coupon(
    session: State<'_, SessionState>,
    code: String,
) -> Result<ApiResponse<CartData>, String> {
    let mut session = session.write().await;
    match session.apply_coupon(&code) {
        Ok(_) => Ok(ApiResponse::success(cart_data(&session))),
        Err(e) => Ok(ApiResponse::from_checkout_error(e)),
    }
}

#[tauri::command]
pub async fn remove_coupon(
    session: State<'_, SessionState>,
) -> Result<ApiResponse<CartData>, String> {
    let mut session = session.write().await;
    session.remove_coupon();
    Ok(ApiResponse::success(cart_data(&session)))
}
