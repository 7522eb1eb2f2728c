//! Receipt print bridge
//!
//! Request/response channel between the UI and the host process: the UI
//! hands over a rendered receipt document, the host loads it in a hidden
//! auxiliary webview window and drives the OS print dialog, then reports
//! success or a typed failure. Each request gets its own auxiliary window
//! and the window is closed on every exit path; overlapping requests are
//! independent and no cancellation is exposed.

use std::sync::Mutex;
use std::time::Duration;

use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{info, warn};
use uuid::Uuid;

/// Print bridge failures, surfaced to the UI as a typed rejection
#[derive(Debug, Error)]
pub enum PrintBridgeError {
    /// The platform can enumerate printers and found none
    #[error("No printers available")]
    NoPrinters,

    /// The receipt document failed to load in the auxiliary window
    #[error("Failed to load receipt document: {0}")]
    LoadFailed(String),

    /// The OS print dialog reported a failure
    #[error("Print dialog failed: {0}")]
    PrintFailed(String),

    /// The document never finished loading within the bounded wait
    #[error("Timed out waiting for receipt document to load")]
    Timeout,
}

/// Print a rendered document through the OS print dialog.
///
/// Opens a hidden auxiliary window on a `data:` URL carrying the document,
/// waits (bounded by `timeout`) for the load to finish, checks printer
/// availability where the platform supports enumeration, and invokes the
/// non-silent OS print dialog.
pub async fn print_document(
    app: &AppHandle,
    html: &str,
    timeout: Duration,
) -> Result<(), PrintBridgeError> {
    let url = document_url(html)?;
    let label = format!("receipt-print-{}", Uuid::new_v4().simple());

    let (load_tx, load_rx) = oneshot::channel::<()>();
    let load_tx = Mutex::new(Some(load_tx));

    let window = WebviewWindowBuilder::new(app, &label, WebviewUrl::External(url))
        .title("Receipt")
        .inner_size(400.0, 600.0)
        .visible(false)
        .on_page_load(move |_webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                if let Some(tx) = load_tx.lock().ok().and_then(|mut guard| guard.take()) {
                    let _ = tx.send(());
                }
            }
        })
        .build()
        .map_err(|e| PrintBridgeError::LoadFailed(e.to_string()))?;

    // From here on the window exists: every exit path below must close it.
    let result = drive_print(&window, load_rx, timeout).await;
    if let Err(e) = window.close() {
        warn!(error = %e, "failed to close receipt window");
    }
    result
}

async fn drive_print(
    window: &WebviewWindow,
    load_rx: oneshot::Receiver<()>,
    timeout: Duration,
) -> Result<(), PrintBridgeError> {
    match tokio::time::timeout(timeout, load_rx).await {
        Ok(Ok(())) => {}
        Ok(Err(_)) => {
            return Err(PrintBridgeError::LoadFailed(
                "receipt window closed before the document loaded".to_string(),
            ));
        }
        Err(_) => return Err(PrintBridgeError::Timeout),
    }

    // The availability gate only applies where the platform can actually
    // enumerate printers; elsewhere the OS dialog is the arbiter.
    if let Some(printers) = pos_printer::available_printers() {
        if printers.is_empty() {
            return Err(PrintBridgeError::NoPrinters);
        }
        info!(count = printers.len(), "printers available");
    }

    window
        .print()
        .map_err(|e| PrintBridgeError::PrintFailed(e.to_string()))?;
    info!(label = window.label(), "print dialog dispatched");
    Ok(())
}

/// Best-effort fallback: an ordinary visible window on the document that
/// invokes the platform print function once the page has loaded. No
/// printer enumeration, no structured success/failure reporting.
pub fn print_document_fallback(app: &AppHandle, html: &str) -> Result<(), PrintBridgeError> {
    let url = document_url(html)?;
    let label = format!("receipt-view-{}", Uuid::new_v4().simple());

    WebviewWindowBuilder::new(app, &label, WebviewUrl::External(url))
        .title("Receipt")
        .inner_size(400.0, 600.0)
        .on_page_load(|webview, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                if let Err(e) = webview.eval("window.print();") {
                    warn!(error = %e, "fallback print invocation failed");
                }
            }
        })
        .build()
        .map_err(|e| PrintBridgeError::LoadFailed(e.to_string()))?;

    Ok(())
}

/// Encode the document as a self-contained `data:` URL
fn document_url(html: &str) -> Result<Url, PrintBridgeError> {
    let encoded = format!(
        "data:text/html;charset=utf-8,{}",
        urlencoding::encode(html)
    );
    Url::parse(&encoded).map_err(|e| PrintBridgeError::LoadFailed(e.to_string()))
}
