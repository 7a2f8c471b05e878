//! # Cart Session
//!
//! The single owner of the live cart for a browser-session equivalent:
//! restores the cart from storage when opened, and writes through after
//! every mutation.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session                                         │
//! │                                                                         │
//! │  open(store) ──► store.load() ──► Cart::from_items(...)                │
//! │                                                                         │
//! │  add / set_quantity / remove / clear                                   │
//! │       │                                                                 │
//! │       ├── mutate the in-memory Cart (aurelia-core)                     │
//! │       ├── store.save(items)        (write-through)                     │
//! │       └── return the CartEvent for the UI to surface                   │
//! │                                                                         │
//! │  Reads (items / total / item_count) never touch storage.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! All mutation happens on the single UI event thread, so the session is a
//! plain `&mut self` object with one owner — no locking. Views that need
//! the cart receive a reference to this session rather than reaching for a
//! global.

use tracing::debug;

use aurelia_core::cart::{Cart, CartEvent, CartItem, CartTotals};

use crate::cart_store::CartStore;
use crate::error::StoreError;

/// The live cart plus its persisted copy.
#[derive(Debug)]
pub struct CartSession {
    cart: Cart,
    store: CartStore,
}

impl CartSession {
    /// Opens a session, restoring any persisted cart.
    ///
    /// Restore cannot fail: malformed persisted state was already discarded
    /// by [`CartStore::load`], so the worst case is an empty cart.
    pub fn open(store: CartStore) -> Self {
        let cart = Cart::from_items(store.load());
        debug!(items = cart.len(), "cart session opened");
        CartSession { cart, store }
    }

    /// Adds an item (or bumps its quantity) and persists.
    pub fn add(&mut self, item: CartItem) -> Result<CartEvent, StoreError> {
        let event = self.cart.add(item);
        self.persist()?;
        Ok(event)
    }

    /// Removes an item by id and persists. Absent ids are a no-op and skip
    /// the write.
    pub fn remove(&mut self, id: &str) -> Result<Option<CartEvent>, StoreError> {
        let event = self.cart.remove(id);
        if event.is_some() {
            self.persist()?;
        }
        Ok(event)
    }

    /// Sets an item's quantity (≤ 0 removes) and persists. Absent ids are a
    /// no-op and skip the write.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Result<Option<CartEvent>, StoreError> {
        let event = self.cart.set_quantity(id, quantity);
        if event.is_some() {
            self.persist()?;
        }
        Ok(event)
    }

    /// Empties the cart and persists.
    pub fn clear(&mut self) -> Result<CartEvent, StoreError> {
        let event = self.cart.clear();
        self.persist()?;
        Ok(event)
    }

    /// Read access to the live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Aggregate summary for the cart drawer.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(self.cart.items())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: i64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            price,
            image: String::new(),
            quantity,
            weight: None,
            material: None,
            making_charge: None,
        }
    }

    #[test]
    fn test_restart_restores_items_and_aggregates() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = CartStore::open(dir.path()).unwrap();
            let mut session = CartSession::open(store);
            session.add(item("a", 500.0, 1)).unwrap();
            session.add(item("b", 1500.0, 2)).unwrap();
        } // session dropped, like closing the tab

        let store = CartStore::open(dir.path()).unwrap();
        let session = CartSession::open(store);

        let ids: Vec<&str> = session.cart().items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(session.cart().total(), 3500.0);
        assert_eq!(session.cart().item_count(), 3);
    }

    #[test]
    fn test_mutations_write_through() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(dir.path()).unwrap();
        let mut session = CartSession::open(store.clone());

        session.add(item("a", 100.0, 2)).unwrap();
        assert_eq!(store.load().len(), 1);

        session.set_quantity("a", 5).unwrap();
        assert_eq!(store.load()[0].quantity, 5);

        session.remove("a").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_clear_persists_empty_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(dir.path()).unwrap();
        let mut session = CartSession::open(store.clone());

        session.add(item("a", 100.0, 1)).unwrap();
        let event = session.clear().unwrap();

        assert_eq!(event, CartEvent::Cleared);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_events_propagate_to_caller() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(dir.path()).unwrap();
        let mut session = CartSession::open(store);

        let event = session.add(item("a", 100.0, 1)).unwrap();
        assert_eq!(
            event,
            CartEvent::Added {
                name: "Product a".to_string()
            }
        );

        // No-op operations report nothing to surface.
        assert_eq!(session.remove("missing").unwrap(), None);
        assert_eq!(session.set_quantity("missing", 3).unwrap(), None);
    }

    #[test]
    fn test_totals_summary() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(dir.path()).unwrap();
        let mut session = CartSession::open(store);

        session.add(item("a", 500.0, 1)).unwrap();
        session.add(item("b", 1500.0, 2)).unwrap();

        let totals = session.totals();
        assert_eq!(totals.total, 3500.0);
        assert_eq!(totals.item_count, 3);
    }
}
