//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CartLine;

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    /// Stable key used for label lookup and statistics buckets
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }
}

/// Order entity - immutable record of a completed purchase
///
/// Appended to order history at checkout, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Snapshot of the cart lines at checkout time (owned copy)
    pub items: Vec<CartLine>,
    /// Amount charged after discount, never negative
    pub total: f64,
    #[serde(rename = "paymentMethod")]
    pub payment_method: PaymentMethod,
    pub date: DateTime<Utc>,
    /// Discount amount, present only when a coupon reduced the total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(rename = "couponCode", skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

impl Order {
    /// Pre-discount subtotal, reconstructed from the stored total
    pub fn subtotal(&self) -> f64 {
        self.total + self.discount.unwrap_or(0.0)
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: id.to_string(),
                name: id.to_string(),
                name_translations: None,
                price,
                category: "Misc".to_string(),
                image: String::new(),
                barcode: String::new(),
            },
            quantity,
        }
    }

    #[test]
    fn test_subtotal_reconstruction() {
        let order = Order {
            id: "o1".to_string(),
            items: vec![line("a", 10.0, 2)],
            total: 18.0,
            payment_method: PaymentMethod::Card,
            date: Utc::now(),
            discount: Some(2.0),
            coupon_code: Some("SAVE10".to_string()),
        };
        assert!((order.subtotal() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_subtotal_without_discount() {
        let order = Order {
            id: "o2".to_string(),
            items: vec![line("a", 5.0, 1)],
            total: 5.0,
            payment_method: PaymentMethod::Cash,
            date: Utc::now(),
            discount: None,
            coupon_code: None,
        };
        assert!((order.subtotal() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_item_count() {
        let order = Order {
            id: "o3".to_string(),
            items: vec![line("a", 1.0, 2), line("b", 1.0, 5)],
            total: 7.0,
            payment_method: PaymentMethod::Cash,
            date: Utc::now(),
            discount: None,
            coupon_code: None,
        };
        assert_eq!(order.item_count(), 7);
    }

    #[test]
    fn test_payment_method_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Card).unwrap(),
            "\"card\""
        );
        let method: PaymentMethod = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(method, PaymentMethod::Cash);
    }
}
