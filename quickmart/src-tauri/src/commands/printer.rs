//! Printer Commands
//!
//! Receipt printing goes through the print bridge; `list_printers` exposes
//! the discovery result so the UI can warn before the shopper even asks
//! for a copy.

use serde::Serialize;
use tauri::{AppHandle, State};
use tracing::warn;

use shared::error::ErrorCode;
use shared::i18n::{Labels, Language};

use crate::core::config::AppConfig;
use crate::core::print_bridge::{print_document, print_document_fallback, PrintBridgeError};
use crate::core::response::ApiResponse;
use crate::utils::receipt_renderer::ReceiptRenderer;
use crate::SessionState;

#[derive(Debug, Clone, Serialize)]
pub struct PrinterListData {
    pub printers: Vec<String>,
    /// False where the platform cannot enumerate printers at all
    pub can_enumerate: bool,
}

#[tauri::command]
pub async fn list_printers() -> Result<ApiResponse<PrinterListData>, String> {
    let data = match pos_printer::available_printers() {
        Some(printers) => PrinterListData {
            printers,
            can_enumerate: true,
        },
        None => PrinterListData {
            printers: Vec::new(),
            can_enumerate: false,
        },
    };
    Ok(ApiResponse::success(data))
}

/// Render an order's receipt and print it through the bridge.
///
/// When the structured path fails for a reason other than `NoPrinters`,
/// the best-effort fallback window is tried before the failure is
/// reported.
#[tauri::command(rename_all = "snake_case")]
pub async fn print_order_receipt(
    app: AppHandle,
    session: State<'_, SessionState>,
    config: State<'_, AppConfig>,
    order_id: String,
    language: Option<String>,
) -> Result<ApiResponse<()>, String> {
    let html = {
        let session = session.read().await;
        let Some(order) = session.find_order(&order_id) else {
            return Ok(ApiResponse::error_with_code(
                ErrorCode::OrderNotFound,
                format!("Order not found: {order_id}"),
            ));
        };
        let language = language
            .map(|tag| Language::from_tag(&tag))
            .unwrap_or(config.default_language);
        ReceiptRenderer::new(order, Labels::for_language(language)).render()
    };

    match print_document(&app, &html, config.print_timeout).await {
        Ok(()) => Ok(ApiResponse::ok()),
        // With zero printers the fallback dialog would have nothing to
        // offer either; report it straight back.
        Err(PrintBridgeError::NoPrinters) => {
            Ok(ApiResponse::from_print_error(PrintBridgeError::NoPrinters))
        }
        Err(e) => {
            warn!(error = %e, order_id = %order_id, "structured print failed, trying fallback");
            if print_document_fallback(&app, &html).is_ok() {
                Ok(ApiResponse::ok())
            } else {
                Ok(ApiResponse::from_print_error(e))
            }
        }
    }
}
