//! Core plumbing for the Tauri shell

pub mod config;
pub mod print_bridge;
pub mod response;

pub use config::AppConfig;
pub use print_bridge::PrintBridgeError;
pub use response::ApiResponse;
