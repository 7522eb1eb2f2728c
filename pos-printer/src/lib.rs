//! # pos-printer
//!
//! Printer discovery for the self-checkout print bridge.
//!
//! ## Scope
//!
//! This crate answers one question for the print bridge: which physical
//! printers does the host have? Receipt rendering and driving the OS print
//! dialog stay in application code.
//!
//! - Windows: spooler enumeration via `EnumPrintersW`, with virtual
//!   printers (PDF/XPS/OneNote ports) filtered out, plus default-printer
//!   lookup.
//! - Other platforms: enumeration is unavailable; callers skip the
//!   availability check and go straight to the OS dialog.

mod error;
mod printer;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use printer::available_printers;

#[cfg(windows)]
pub use printer::{default_printer, list_printers};
