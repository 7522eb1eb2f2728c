//! Sales statistics derived from order history
//!
//! Pure functions of their input; nothing here stores state. The 7-day
//! window is computed against the caller's wall clock, not a stored cutoff.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use shared::models::{Order, PaymentMethod};

/// Default size of the top-products ranking
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// Per-product sales rollup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    /// Units sold across all orders
    pub quantity: u32,
    /// Revenue (`price × quantity`) summed across all orders
    pub revenue: f64,
}

/// Orders and revenue over a time window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodStats {
    pub orders: u64,
    pub revenue: f64,
}

/// Order counts per payment method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentMethodMix {
    pub card: u64,
    pub cash: u64,
}

/// Aggregate sales figures over the full order history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesStats {
    pub total_revenue: f64,
    pub total_orders: u64,
    /// 0 when there are no orders (no division by zero)
    pub average_order: f64,
    pub items_sold: u64,
    pub last_7_days: PeriodStats,
    pub payment_methods: PaymentMethodMix,
    /// Descending by revenue; ties keep encounter order
    pub top_products: Vec<TopProduct>,
}

impl SalesStats {
    /// Compute statistics over an order history.
    ///
    /// `now` is the wall clock at call time and only bounds the 7-day
    /// window (inclusive lower bound).
    pub fn compute(orders: &[Order], now: DateTime<Utc>, top_n: usize) -> Self {
        let total_revenue: f64 = orders.iter().map(|o| o.total).sum();
        let total_orders = orders.len() as u64;
        let average_order = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };
        let items_sold = orders.iter().map(|o| u64::from(o.item_count())).sum();

        let cutoff = now - Duration::days(7);
        let mut last_7_days = PeriodStats::default();
        for order in orders.iter().filter(|o| o.date >= cutoff) {
            last_7_days.orders += 1;
            last_7_days.revenue += order.total;
        }

        let mut payment_methods = PaymentMethodMix::default();
        for order in orders {
            match order.payment_method {
                PaymentMethod::Card => payment_methods.card += 1,
                PaymentMethod::Cash => payment_methods.cash += 1,
            }
        }

        Self {
            total_revenue,
            total_orders,
            average_order,
            items_sold,
            last_7_days,
            payment_methods,
            top_products: top_products(orders, top_n),
        }
    }
}

/// Group line items by product id across all orders, summing quantity and
/// revenue, then rank descending by revenue. The sort is stable, so revenue
/// ties keep the order in which products were first encountered.
fn top_products(orders: &[Order], top_n: usize) -> Vec<TopProduct> {
    let mut rollup: Vec<TopProduct> = Vec::new();
    for line in orders.iter().flat_map(|o| o.items.iter()) {
        let revenue = line.line_total();
        if let Some(entry) = rollup.iter_mut().find(|p| p.id == line.product.id) {
            entry.quantity += line.quantity;
            entry.revenue += revenue;
        } else {
            rollup.push(TopProduct {
                id: line.product.id.clone(),
                name: line.product.name.clone(),
                quantity: line.quantity,
                revenue,
            });
        }
    }
    rollup.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rollup.truncate(top_n);
    rollup
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CartLine, Product};

    fn line(id: &str, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product: Product {
                id: id.to_string(),
                name: format!("Product {id}"),
                name_translations: None,
                price,
                category: "Misc".to_string(),
                image: String::new(),
                barcode: String::new(),
            },
            quantity,
        }
    }

    fn order(
        id: &str,
        items: Vec<CartLine>,
        method: PaymentMethod,
        date: DateTime<Utc>,
    ) -> Order {
        let total = items.iter().map(CartLine::line_total).sum();
        Order {
            id: id.to_string(),
            items,
            total,
            payment_method: method,
            date,
            discount: None,
            coupon_code: None,
        }
    }

    #[test]
    fn test_empty_history_is_all_zeroes() {
        let stats = SalesStats::compute(&[], Utc::now(), DEFAULT_TOP_PRODUCTS);
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.total_revenue, 0.0);
        assert_eq!(stats.average_order, 0.0);
        assert_eq!(stats.items_sold, 0);
        assert_eq!(stats.last_7_days.orders, 0);
        assert!(stats.top_products.is_empty());
    }

    #[test]
    fn test_totals_and_average() {
        let now = Utc::now();
        let orders = vec![
            order("a", vec![line("x", 10.0, 1)], PaymentMethod::Card, now),
            order("b", vec![line("y", 5.0, 2)], PaymentMethod::Cash, now),
        ];
        let stats = SalesStats::compute(&orders, now, DEFAULT_TOP_PRODUCTS);
        assert!((stats.total_revenue - 20.0).abs() < 1e-9);
        assert_eq!(stats.total_orders, 2);
        assert!((stats.average_order - 10.0).abs() < 1e-9);
        assert_eq!(stats.items_sold, 3);
        assert_eq!(stats.payment_methods.card, 1);
        assert_eq!(stats.payment_methods.cash, 1);
    }

    #[test]
    fn test_last_7_days_window_is_inclusive() {
        let now = Utc::now();
        let orders = vec![
            order("old", vec![line("x", 1.0, 1)], PaymentMethod::Card, now - Duration::days(8)),
            order("edge", vec![line("x", 2.0, 1)], PaymentMethod::Card, now - Duration::days(7)),
            order("new", vec![line("x", 3.0, 1)], PaymentMethod::Card, now),
        ];
        let stats = SalesStats::compute(&orders, now, DEFAULT_TOP_PRODUCTS);
        assert_eq!(stats.last_7_days.orders, 2);
        assert!((stats.last_7_days.revenue - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_products_ranking() {
        let now = Utc::now();
        // Order A: productX qty 2 @ $3; Order B: productX qty 1 @ $3,
        // productY qty 5 @ $1. Expect X at $9 ahead of Y at $5.
        let orders = vec![
            order("a", vec![line("x", 3.0, 2)], PaymentMethod::Card, now),
            order(
                "b",
                vec![line("x", 3.0, 1), line("y", 1.0, 5)],
                PaymentMethod::Cash,
                now,
            ),
        ];
        let stats = SalesStats::compute(&orders, now, DEFAULT_TOP_PRODUCTS);
        assert_eq!(stats.top_products.len(), 2);
        assert_eq!(stats.top_products[0].id, "x");
        assert!((stats.top_products[0].revenue - 9.0).abs() < 1e-9);
        assert_eq!(stats.top_products[0].quantity, 3);
        assert_eq!(stats.top_products[1].id, "y");
        assert!((stats.top_products[1].revenue - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_products_ties_keep_encounter_order() {
        let now = Utc::now();
        let orders = vec![order(
            "a",
            vec![line("x", 2.0, 1), line("y", 2.0, 1)],
            PaymentMethod::Card,
            now,
        )];
        let stats = SalesStats::compute(&orders, now, DEFAULT_TOP_PRODUCTS);
        assert_eq!(stats.top_products[0].id, "x");
        assert_eq!(stats.top_products[1].id, "y");
    }

    #[test]
    fn test_top_products_truncates_to_n() {
        let now = Utc::now();
        let items: Vec<CartLine> = (0..8).map(|i| line(&format!("p{i}"), 1.0 + i as f64, 1)).collect();
        let orders = vec![order("a", items, PaymentMethod::Card, now)];
        let stats = SalesStats::compute(&orders, now, 5);
        assert_eq!(stats.top_products.len(), 5);
        // Highest price first.
        assert_eq!(stats.top_products[0].id, "p7");
    }
}
