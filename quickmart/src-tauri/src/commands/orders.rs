//! Order History Commands

use serde::Serialize;
use tauri::State;

use shared::error::ErrorCode;
use shared::models::Order;

use crate::core::response::ApiResponse;
use crate::SessionState;

#[derive(Debug, Clone, Serialize)]
pub struct OrderListData {
    pub orders: Vec<Order>,
}

/// Full order history, most-recent-first
#[tauri::command]
pub async fn list_orders(
    session: State<'_, SessionState>,
) -> Result<ApiResponse<OrderListData>, String> {
    let session = session.read().await;
    Ok(ApiResponse::success(OrderListData {
        orders: session.orders().to_vec(),
    }))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn get_order(
    session: State<'_, SessionState>,
    order_id: String,
) -> Result<ApiResponse<Order>, String> {
    let session = session.read().await;
    match session.find_order(&order_id) {
        Some(order) => Ok(ApiResponse::success(order.clone())),
        None => Ok(ApiResponse::error_with_code(
            ErrorCode::OrderNotFound,
            format!("Order not found: {order_id}"),
        )),
    }
}
