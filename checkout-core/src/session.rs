//! Checkout session
//!
//! The explicit session object owned by the desktop shell: catalog, cart
//! ledger, coupon state, and order history, with durability through an
//! optional [`SessionStore`]. A session without a store runs in-memory only
//! (the degraded mode used when the store cannot be opened at startup).
//!
//! Mutations are all-or-nothing: cart changes are staged on a copy and only
//! swapped in after the persisted write succeeds, and checkout commits the
//! new history and the emptied cart in one storage transaction.

use chrono::Utc;
use shared::models::{Order, PaymentMethod, Product};
use tracing::{debug, info};
use uuid::Uuid;

use crate::cart::{CartEvent, CartLedger};
use crate::catalog::Catalog;
use crate::coupon::{AppliedCoupon, CouponBook};
use crate::error::{CheckoutError, CheckoutResult};
use crate::storage::SessionStore;

/// One kiosk session: single-writer, mutated only through these methods
pub struct CheckoutSession {
    catalog: Catalog,
    coupons: CouponBook,
    cart: CartLedger,
    applied_coupon: Option<AppliedCoupon>,
    history: Vec<Order>,
    store: Option<SessionStore>,
}

impl CheckoutSession {
    /// Open a session on a durable store, restoring the persisted cart and
    /// order history
    pub fn open(store: SessionStore) -> CheckoutResult<Self> {
        let cart = CartLedger::from_lines(store.load_cart()?);
        let history = store.load_orders()?;
        debug!(
            cart_lines = cart.len(),
            orders = history.len(),
            "session restored from store"
        );
        Ok(Self {
            catalog: Catalog::builtin(),
            coupons: CouponBook::builtin(),
            cart,
            applied_coupon: None,
            history,
            store: Some(store),
        })
    }

    /// Session without durable storage. Used when the store is unavailable
    /// at startup; everything works, nothing survives a restart.
    pub fn in_memory() -> Self {
        Self {
            catalog: Catalog::builtin(),
            coupons: CouponBook::builtin(),
            cart: CartLedger::new(),
            applied_coupon: None,
            history: Vec::new(),
            store: None,
        }
    }

    // ========== Read Access ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn coupons(&self) -> &CouponBook {
        &self.coupons
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    pub fn applied_coupon(&self) -> Option<&AppliedCoupon> {
        self.applied_coupon.as_ref()
    }

    /// Order history, most-recent-first
    pub fn orders(&self) -> &[Order] {
        &self.history
    }

    pub fn find_order(&self, id: &str) -> Option<&Order> {
        self.history.iter().find(|o| o.id == id)
    }

    pub fn is_persistent(&self) -> bool {
        self.store.is_some()
    }

    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    /// Active coupon discount amount; 0 when no coupon is applied
    pub fn discount(&self) -> f64 {
        self.applied_coupon.as_ref().map_or(0.0, |c| c.amount)
    }

    /// Amount due: `max(0, subtotal − discount)`
    pub fn total(&self) -> f64 {
        (self.subtotal() - self.discount()).max(0.0)
    }

    // ========== Cart Mutations ==========

    /// Add one unit of a catalog product to the cart.
    ///
    /// Returns `Ok(None)` for an unknown product id; otherwise the cart
    /// event distinguishing a first add from a quantity increment.
    pub fn add_to_cart(&mut self, product_id: &str) -> CheckoutResult<Option<CartEvent>> {
        let Some(product) = self.catalog.get(product_id).cloned() else {
            return Ok(None);
        };

        // Stage on a copy so a failed persist leaves the live cart untouched.
        let mut next = self.cart.clone();
        let event = next.add(&product);
        self.persist_cart(&next)?;
        self.cart = next;
        Ok(Some(event))
    }

    /// Adjust a line quantity by a signed delta; a result <= 0 removes the
    /// line, an unknown id is a no-op
    pub fn update_quantity(&mut self, product_id: &str, delta: i32) -> CheckoutResult<()> {
        let mut next = self.cart.clone();
        next.update_quantity(product_id, delta);
        self.persist_cart(&next)?;
        self.cart = next;
        Ok(())
    }

    /// Remove a line unconditionally; returns whether one was present
    pub fn remove_item(&mut self, product_id: &str) -> CheckoutResult<bool> {
        let mut next = self.cart.clone();
        let removed = next.remove(product_id);
        if removed {
            self.persist_cart(&next)?;
            self.cart = next;
        }
        Ok(removed)
    }

    /// Empty the cart
    pub fn clear_cart(&mut self) -> CheckoutResult<()> {
        let next = CartLedger::new();
        self.persist_cart(&next)?;
        self.cart = next;
        Ok(())
    }

    // ========== Coupons ==========

    /// Apply a coupon code against the current subtotal.
    ///
    /// An unknown code fails with [`CheckoutError::InvalidCoupon`] and
    /// leaves any previously applied coupon in place; a valid code replaces
    /// the prior one. The discount amount is fixed at apply time.
    pub fn apply_coupon(&mut self, code: &str) -> CheckoutResult<AppliedCoupon> {
        let applied = self.coupons.evaluate(code, self.subtotal())?;
        info!(code = %applied.code, amount = applied.amount, "coupon applied");
        self.applied_coupon = Some(applied.clone());
        Ok(applied)
    }

    /// Clear the active coupon and reset the discount to 0
    pub fn remove_coupon(&mut self) {
        self.applied_coupon = None;
    }

    // ========== Checkout ==========

    /// Materialize the current cart into an immutable order.
    ///
    /// Fails with [`CheckoutError::EmptyCart`] when there is nothing to buy.
    /// On success the order is prepended to history (most-recent-first), the
    /// cart and coupon state are reset, and both records are persisted in a
    /// single storage transaction.
    pub fn checkout(&mut self, payment_method: PaymentMethod) -> CheckoutResult<Order> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let discount = self.discount();
        let order = Order {
            id: Uuid::new_v4().to_string(),
            items: self.cart.lines().to_vec(),
            total: self.total(),
            payment_method,
            date: Utc::now(),
            discount: (discount > 0.0).then_some(discount),
            coupon_code: self.applied_coupon.as_ref().map(|c| c.code.clone()),
        };

        // Persist before mutating memory: a rejected commit must leave the
        // session exactly as it was.
        if let Some(store) = &self.store {
            let mut orders = Vec::with_capacity(self.history.len() + 1);
            orders.push(order.clone());
            orders.extend(self.history.iter().cloned());
            store.commit_checkout(&orders, &[])?;
        }

        self.history.insert(0, order.clone());
        self.cart.clear();
        self.applied_coupon = None;

        info!(
            order_id = %order.id,
            total = order.total,
            method = payment_method.as_str(),
            "checkout complete"
        );
        Ok(order)
    }

    /// Look up a product by scanned barcode (first match in catalog order)
    pub fn product_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.catalog.find_by_barcode(barcode)
    }

    fn persist_cart(&self, cart: &CartLedger) -> CheckoutResult<()> {
        if let Some(store) = &self.store {
            store.save_cart(cart.lines())?;
        }
        Ok(())
    }
}
