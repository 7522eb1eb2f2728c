//! redb-based durable session storage
//!
//! # Records
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `cart` | `Vec<CartLine>` | Live cart, ordered |
//! | `orders` | `Vec<Order>` | Order history, most-recent-first |
//!
//! Both records are read once at session open and overwritten wholesale on
//! each mutation. Commits are durable as soon as `commit()` returns and the
//! database file is always in a consistent state, which matters on kiosks
//! that get powered off without warning.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::models::{CartLine, Order};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single key-value table holding the named session records as JSON
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

const CART_KEY: &str = "cart";
const ORDERS_KEY: &str = "orders";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Session storage backed by redb
#[derive(Clone)]
pub struct SessionStore {
    db: Arc<Database>,
}

impl SessionStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    // ========== Cart Record ==========

    /// Load the persisted cart; absent record means an empty cart
    pub fn load_cart(&self) -> StorageResult<Vec<CartLine>> {
        Ok(self.read_record(CART_KEY)?.unwrap_or_default())
    }

    /// Overwrite the cart record
    pub fn save_cart(&self, lines: &[CartLine]) -> StorageResult<()> {
        self.write_record(CART_KEY, &lines)
    }

    // ========== Order History Record ==========

    /// Load the persisted order history (most-recent-first); absent record
    /// means no orders yet
    pub fn load_orders(&self) -> StorageResult<Vec<Order>> {
        Ok(self.read_record(ORDERS_KEY)?.unwrap_or_default())
    }

    /// Overwrite the order history record
    pub fn save_orders(&self, orders: &[Order]) -> StorageResult<()> {
        self.write_record(ORDERS_KEY, &orders)
    }

    // ========== Checkout Commit ==========

    /// Persist the post-checkout state in a single transaction: the new
    /// order history and the (emptied) cart either both land or neither
    /// does.
    pub fn commit_checkout(&self, orders: &[Order], cart: &[CartLine]) -> StorageResult<()> {
        let orders_bytes = serde_json::to_vec(&orders)?;
        let cart_bytes = serde_json::to_vec(&cart)?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            table.insert(ORDERS_KEY, orders_bytes.as_slice())?;
            table.insert(CART_KEY, cart_bytes.as_slice())?;
        }
        txn.commit()?;
        tracing::debug!(orders = orders.len(), "checkout committed to session store");
        Ok(())
    }

    // ========== Record Plumbing ==========

    fn read_record<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    fn write_record<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(SESSION_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::models::{PaymentMethod, Product};

    fn test_line(id: &str, price: f64, quantity: u32) -> CartLine {
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

    fn test_order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            items: vec![test_line("a", 2.0, 2)],
            total: 4.0,
            payment_method: PaymentMethod::Card,
            date: Utc::now(),
            discount: None,
            coupon_code: None,
        }
    }

    #[test]
    fn test_empty_store_loads_empty_records() {
        let store = SessionStore::open_in_memory().unwrap();
        assert!(store.load_cart().unwrap().is_empty());
        assert!(store.load_orders().unwrap().is_empty());
    }

    #[test]
    fn test_cart_round_trip() {
        let store = SessionStore::open_in_memory().unwrap();
        let lines = vec![test_line("a", 3.99, 2), test_line("b", 1.99, 1)];

        store.save_cart(&lines).unwrap();

        let loaded = store.load_cart().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].product.id, "a");
        assert_eq!(loaded[0].quantity, 2);
        assert_eq!(loaded[1].product.id, "b");
    }

    #[test]
    fn test_orders_round_trip_preserves_order() {
        let store = SessionStore::open_in_memory().unwrap();
        let orders = vec![test_order("newest"), test_order("older")];

        store.save_orders(&orders).unwrap();

        let loaded = store.load_orders().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "newest");
        assert_eq!(loaded[1].id, "older");
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let store = SessionStore::open_in_memory().unwrap();
        store.save_cart(&[test_line("a", 1.0, 1)]).unwrap();
        store.save_cart(&[]).unwrap();
        assert!(store.load_cart().unwrap().is_empty());
    }

    #[test]
    fn test_commit_checkout_updates_both_records() {
        let store = SessionStore::open_in_memory().unwrap();
        store.save_cart(&[test_line("a", 2.0, 2)]).unwrap();

        let orders = vec![test_order("o1")];
        store.commit_checkout(&orders, &[]).unwrap();

        assert!(store.load_cart().unwrap().is_empty());
        let loaded = store.load_orders().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "o1");
    }

    #[test]
    fn test_on_disk_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.redb");

        {
            let store = SessionStore::open(&path).unwrap();
            store.save_orders(&[test_order("persisted")]).unwrap();
        }

        let store = SessionStore::open(&path).unwrap();
        let loaded = store.load_orders().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "persisted");
    }
}
