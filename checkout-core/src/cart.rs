//! Cart ledger
//!
//! Ordered collection of cart lines keyed by product id. Insertion order is
//! preserved (the persisted record is an ordered sequence). A line's
//! quantity is always >= 1 while it is present; any operation that would
//! drop a quantity to zero removes the line instead of storing it.

use shared::models::{CartLine, Product};

/// Outcome of an add, used by the shell to pick the right UI notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// Product entered the cart for the first time
    Added,
    /// Product was already present; carries the quantity after the increment
    Incremented { quantity: u32 },
}

/// The live cart
#[derive(Debug, Clone, Default)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted lines
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Add one unit of a product. Always succeeds: an existing line is
    /// incremented, otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) -> CartEvent {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            CartEvent::Incremented {
                quantity: line.quantity,
            }
        } else {
            self.lines.push(CartLine::new(product.clone()));
            CartEvent::Added
        }
    }

    /// Adjust a line's quantity by a signed delta. A result <= 0 removes the
    /// line entirely; an absent id is a no-op, not an error.
    pub fn update_quantity(&mut self, id: &str, delta: i32) {
        let Some(index) = self.lines.iter().position(|l| l.product.id == id) else {
            return;
        };
        let quantity = i64::from(self.lines[index].quantity) + i64::from(delta);
        if quantity <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity as u32;
        }
    }

    /// Delete a line unconditionally. Returns whether a line was present.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product.id != id);
        self.lines.len() != before
    }

    /// Empty the ledger
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `price × quantity` over all lines; 0 for the empty cart
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Quantity of a product currently in the cart, if any
    pub fn quantity_of(&self, id: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.product.id == id)
            .map(|l| l.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            name_translations: None,
            price,
            category: "Misc".to_string(),
            image: String::new(),
            barcode: String::new(),
        }
    }

    #[test]
    fn test_add_first_then_increment() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.add(&product("a", 1.0)), CartEvent::Added);
        assert_eq!(
            cart.add(&product("a", 1.0)),
            CartEvent::Incremented { quantity: 2 }
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(2));
    }

    #[test]
    fn test_subtotal() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.subtotal(), 0.0);

        cart.add(&product("a", 3.99));
        cart.add(&product("a", 3.99));
        cart.add(&product("b", 1.99));
        assert!((cart.subtotal() - 9.97).abs() < 1e-9);
    }

    #[test]
    fn test_update_quantity_removes_at_zero() {
        let mut cart = CartLedger::new();
        cart.add(&product("a", 1.0));
        cart.add(&product("a", 1.0));

        cart.update_quantity("a", -1);
        assert_eq!(cart.quantity_of("a"), Some(1));

        cart.update_quantity("a", -1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_below_zero_removes() {
        let mut cart = CartLedger::new();
        cart.add(&product("a", 1.0));
        cart.update_quantity("a", -5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut cart = CartLedger::new();
        cart.add(&product("a", 1.0));
        cart.update_quantity("zzz", 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("a"), Some(1));
    }

    #[test]
    fn test_no_line_ever_has_zero_quantity() {
        let mut cart = CartLedger::new();
        // Arbitrary op sequence; the invariant must hold after each step.
        cart.add(&product("a", 2.0));
        cart.add(&product("b", 3.0));
        cart.update_quantity("a", 4);
        cart.update_quantity("b", -1);
        cart.add(&product("b", 3.0));
        cart.update_quantity("a", -10);
        cart.remove("c");

        assert!(cart.lines().iter().all(|l| l.quantity >= 1));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = CartLedger::new();
        cart.add(&product("a", 1.0));
        cart.add(&product("b", 2.0));

        assert!(cart.remove("a"));
        assert!(!cart.remove("a"));
        assert_eq!(cart.len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), 0.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartLedger::new();
        cart.add(&product("b", 1.0));
        cart.add(&product("a", 1.0));
        cart.add(&product("b", 1.0));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
