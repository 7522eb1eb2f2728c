//! Cart Commands
//!
//! Every mutation returns the resulting cart view so the UI never has to
//! re-query after an action.

use serde::Serialize;
use tauri::{AppHandle, Emitter, State};
use tracing::warn;

use checkout_core::CheckoutSession;
use shared::error::ErrorCode;
use shared::models::CartLine;

use crate::core::config::AppConfig;
use crate::core::response::ApiResponse;
use crate::events::{CartChangedEvent, CART_CHANGED};
use crate::SessionState;

/// Cart view returned by every cart mutation
#[derive(Debug, Clone, Serialize)]
pub struct CartData {
    pub lines: Vec<CartLine>,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

pub(crate) fn cart_data(session: &CheckoutSession) -> CartData {
    CartData {
        lines: session.cart().lines().to_vec(),
        subtotal: session.subtotal(),
        discount: session.discount(),
        total: session.total(),
        coupon_code: session.applied_coupon().map(|c| c.code.clone()),
    }
}

#[tauri::command]
pub async fn get_cart(session: State<'_, SessionState>) -> Result<ApiResponse<CartData>, String> {
    let session = session.read().await;
    Ok(ApiResponse::success(cart_data(&session)))
}

#[tauri::command(rename_all = "snake_case")]
pub async fn add_to_cart(
    app: AppHandle,
    session: State<'_, SessionState>,
    config: State<'_, AppConfig>,
    product_id: String,
) -> Result<ApiResponse<CartData>, String> {
    let mut session = session.write().await;
    match session.add_to_cart(&product_id) {
        Ok(Some(event)) => {
            if let Some(product) = session.catalog().get(&product_id) {
                let payload = CartChangedEvent::new(product, event, config.default_language);
                if let Err(e) = app.emit(CART_CHANGED, &payload) {
                    warn!(error = %e, "failed to emit cart event");
                }
            }
            Ok(ApiResponse::success(cart_data(&session)))
        }
        Ok(None) => Ok(ApiResponse::error_with_code(
            ErrorCode::ProductNotFound,
            format!("Unknown product: {product_id}"),
        )),
        Err(e) => Ok(ApiResponse::from_checkout_error(e)),
    }
}

#[tauri::command(rename_all = "snake_case")]
pub async fn update_quantity(
    session: State<'_, SessionState>,
    product_id: String,
    delta: i32,
) -> Result<ApiResponse<CartData>, String> {
    let mut session = session.write().await;
    match session.update_quantity(&product_id, delta) {
        Ok(()) => Ok(ApiResponse::success(cart_data(&session))),
        Err(e) => Ok(ApiResponse::from_checkout_error(e)),
    }
}

#[tauri::command(rename_all = "snake_case")]
pub async fn remove_item(
    session: State<'_, SessionState>,
    product_id: String,
) -> Result<ApiResponse<CartData>, String> {
    let mut session = session.write().await;
    match session.remove_item(&product_id) {
        Ok(_) => Ok(ApiResponse::success(cart_data(&session))),
        Err(e) => Ok(ApiResponse::from_checkout_error(e)),
    }
}

#[tauri::command]
pub async fn clear_cart(
    session: State<'_, SessionState>,
) -> Result<ApiResponse<CartData>, String> {
    let mut session = session.write().await;
    match session.clear_cart() {
        Ok(()) => Ok(ApiResponse::success(cart_data(&session))),
        Err(e) => Ok(ApiResponse::from_checkout_error(e)),
    }
}
