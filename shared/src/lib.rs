//! Shared types for the QuickMart self-checkout
//!
//! Common types used across multiple crates: the product/cart/order data
//! model, the error code table, and the localized label tables the core
//! prints with.

pub mod error;
pub mod i18n;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::ErrorCode;
pub use i18n::{Labels, Language};
