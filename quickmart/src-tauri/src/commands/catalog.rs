//! Catalog Commands
//!
//! Read-only queries over the static product catalog.

use serde::Serialize;
use tauri::State;

use shared::error::ErrorCode;
use shared::models::Product;

use crate::core::response::ApiResponse;
use crate::SessionState;

#[derive(Debug, Clone, Serialize)]
pub struct ProductListData {
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryListData {
    pub categories: Vec<String>,
}

#[tauri::command]
pub async fn list_products(
    session: State<'_, SessionState>,
) -> Result<ApiResponse<ProductListData>, String> {
    let session = session.read().await;
    Ok(ApiResponse::success(ProductListData {
        products: session.catalog().products().to_vec(),
    }))
}

#[tauri::command]
pub async fn list_categories(
    session: State<'_, SessionState>,
) -> Result<ApiResponse<CategoryListData>, String> {
    let session = session.read().await;
    Ok(ApiResponse::success(CategoryListData {
        categories: session
            .catalog()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }))
}

#[tauri::command]
pub async fn search_products(
    session: State<'_, SessionState>,
    query: String,
) -> Result<ApiResponse<ProductListData>, String> {
    let session = session.read().await;
    Ok(ApiResponse::success(ProductListData {
        products: session
            .catalog()
            .search(&query)
            .into_iter()
            .cloned()
            .collect(),
    }))
}

/// Exact barcode lookup; first match in catalog order wins
#[tauri::command]
pub async fn lookup_barcode(
    session: State<'_, SessionState>,
    barcode: String,
) -> Result<ApiResponse<Product>, String> {
    let session = session.read().await;
    match session.product_by_barcode(&barcode) {
        Some(product) => Ok(ApiResponse::success(product.clone())),
        None => Ok(ApiResponse::error_with_code(
            ErrorCode::BarcodeNotFound,
            format!("No product with barcode {barcode}"),
        )),
    }
}
