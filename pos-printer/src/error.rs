//! Error types for printer discovery

use thiserror::Error;

/// Printer discovery error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// Platform spooler query failed
    #[error("Spooler error: {0}")]
    Spooler(String),

    /// Printer enumeration is not supported on this platform
    #[error("Printer enumeration not supported on this platform")]
    Unsupported,
}

/// Result type for printer discovery operations
pub type PrintResult<T> = Result<T, PrintError>;
