//! QuickMart Self-Checkout - Tauri Application
//!
//! Desktop shell around the checkout engine: exposes the catalog, cart,
//! coupon, checkout, order-history, and statistics operations to the web UI
//! as Tauri commands, and hosts the receipt print bridge.

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;
use tokio::sync::RwLock;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Re-export the engine for integration consumers
pub use checkout_core;
pub use shared;

pub mod commands;
pub mod core;
pub mod events;
pub mod utils;

use checkout_core::{CheckoutSession, SessionStore};
use core::config::AppConfig;

/// Session handle shared with every command
pub type SessionState = Arc<RwLock<CheckoutSession>>;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            let config = AppConfig::from_env();

            // 1. Initialize logging system
            let log_dir = app.path().app_data_dir()?.join("logs");
            std::fs::create_dir_all(&log_dir)
                .map_err(|e| format!("Failed to create logs directory: {}", e))?;

            let file_appender = rolling::daily(&log_dir, "quickmart-pos.log");
            let (non_blocking_file, log_guard) = tracing_appender::non_blocking(file_appender);

            let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
                from_env
            } else if cfg!(debug_assertions) {
                EnvFilter::new("info,tao=error,quickmart=debug,checkout_core=debug")
            } else {
                EnvFilter::new("warn,tao=error")
            };

            let file_layer = fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(non_blocking_file);

            let stdout_layer = fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(true)
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stdout);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .with(stdout_layer)
                .init();

            // Keep the non-blocking writer alive for the app's lifetime.
            app.manage(log_guard);

            std::panic::set_hook(Box::new(|info| {
                let backtrace = std::backtrace::Backtrace::capture();
                let msg = info.to_string();
                eprintln!(
                    "!!! APPLICATION PANIC !!!\nMessage: {}\nBacktrace:\n{}",
                    msg, backtrace
                );
                tracing::error!(target: "panic", message = %msg, backtrace = %backtrace, "panic occurred");
            }));

            tracing::info!(path = log_dir.display().to_string(), "Tracing initialized successfully");

            // 2. Setup data directory
            let app_data_dir = app
                .path()
                .app_data_dir()
                .unwrap_or_else(|_| PathBuf::from("."));
            let work_dir = config
                .data_dir
                .clone()
                .unwrap_or_else(|| app_data_dir.join("quickmart"));
            std::fs::create_dir_all(&work_dir).ok();

            tracing::info!(work_dir = %work_dir.display(), "QuickMart self-checkout starting...");

            // 3. Restore the checkout session; an unavailable store degrades
            // to in-memory-only operation instead of blocking startup.
            let session = match SessionStore::open(work_dir.join("session.redb")) {
                Ok(store) => match CheckoutSession::open(store) {
                    Ok(session) => session,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to restore session, running in-memory only");
                        CheckoutSession::in_memory()
                    }
                },
                Err(e) => {
                    tracing::error!(error = %e, "session store unavailable, running in-memory only");
                    CheckoutSession::in_memory()
                }
            };

            tracing::info!(
                orders = session.orders().len(),
                cart_lines = session.cart().len(),
                persistent = session.is_persistent(),
                "checkout session ready"
            );

            app.manage::<SessionState>(Arc::new(RwLock::new(session)));
            app.manage(config);

            Ok(())
        })
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::list_products,
            commands::list_categories,
            commands::search_products,
            commands::lookup_barcode,
            // Cart commands
            commands::get_cart,
            commands::add_to_cart,
            commands::update_quantity,
            commands::remove_item,
            commands::clear_cart,
            // Coupon commands
            commands::apply_coupon,
            commands::remove_coupon,
            // Checkout commands
            commands::complete_checkout,
            // Order history commands
            commands::list_orders,
            commands::get_order,
            // Statistics commands
            commands::get_statistics,
            // Printer commands
            commands::list_printers,
            commands::print_order_receipt,
            // System commands
            commands::get_app_version,
            commands::get_platform,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
