//! System Commands
//!
//! Read-only host information queries; no side effects, always succeed.

use tauri::AppHandle;

use crate::core::response::ApiResponse;

#[tauri::command]
pub async fn get_app_version(app: AppHandle) -> Result<ApiResponse<String>, String> {
    Ok(ApiResponse::success(app.package_info().version.to_string()))
}

#[tauri::command]
pub async fn get_platform() -> Result<ApiResponse<String>, String> {
    Ok(ApiResponse::success(std::env::consts::OS.to_string()))
}
