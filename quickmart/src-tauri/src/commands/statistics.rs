//! Statistics Commands

use tauri::State;

use checkout_core::{SalesStats, DEFAULT_TOP_PRODUCTS};

use crate::core::response::ApiResponse;
use crate::SessionState;

/// Aggregate sales statistics over the full order history. The 7-day
/// window is evaluated against the wall clock at call time.
#[tauri::command(rename_all = "snake_case")]
pub async fn get_statistics(
    session: State<'_, SessionState>,
    top_n: Option<usize>,
) -> Result<ApiResponse<SalesStats>, String> {
    let session = session.read().await;
    let stats = SalesStats::compute(
        session.orders(),
        chrono::Utc::now(),
        top_n.unwrap_or(DEFAULT_TOP_PRODUCTS),
    );
    Ok(ApiResponse::success(stats))
}
