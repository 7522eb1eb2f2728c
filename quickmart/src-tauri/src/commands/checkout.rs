//! Checkout Commands

use tauri::State;
use tracing::info;

use shared::models::{Order, PaymentMethod};

use crate::core::response::ApiResponse;
use crate::SessionState;

/// Complete the purchase: materialize the cart into an order, reset the
/// cart and coupon state, and hand the new order back to the UI. Fails
/// with `EmptyCart` when there is nothing to buy.
#[tauri::command(rename_all = "snake_case")]
pub async fn complete_checkout(
    session: State<'_, SessionState>,
    payment_method: PaymentMethod,
) -> Result<ApiResponse<Order>, String> {
    let mut session = session.write().await;
    match session.checkout(payment_method) {
        Ok(order) => {
            info!(order_id = %order.id, total = order.total, "order completed");
            Ok(ApiResponse::success(order))
        }
        Err(e) => Ok(ApiResponse::from_checkout_error(e)),
    }
}
