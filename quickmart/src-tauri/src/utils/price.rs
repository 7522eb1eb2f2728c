//! Price formatting
//!
//! Every monetary surface the backend renders formats through here, so the
//! receipt and any logged amounts agree on exactly two decimal places.

/// Format an amount as a dollar string with exactly two decimals
///
/// # Examples
///
/// ```
/// use quickmart_lib::utils::price::format_usd;
///
/// assert_eq!(format_usd(12.5), "$12.50");
/// assert_eq!(format_usd(0.0), "$0.00");
/// ```
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}
