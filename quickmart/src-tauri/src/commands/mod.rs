//! Tauri Commands for the QuickMart self-checkout

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod coupon;
pub mod orders;
pub mod printer;
pub mod statistics;
pub mod system;

pub use cart::*;
pub use catalog::*;
pub use checkout::*;
pub use coupon::*;
pub use orders::*;
pub use printer::*;
pub use statistics::*;
pub use system::*;
