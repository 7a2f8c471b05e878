//! # Cart Aggregator
//!
//! The authoritative shopping cart for the current session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Operation              State Change           │
//! │  ─────────                ─────────              ────────────           │
//! │                                                                         │
//! │  Add to cart ───────────► add(item) ───────────► push / qty += n       │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity(id, q) ─► qty = q (q≤0 removes) │
//! │                                                                         │
//! │  Click remove ──────────► remove(id) ──────────► items.retain(...)     │
//! │                                                                         │
//! │  Clear cart ────────────► clear() ─────────────► items.clear()         │
//! │                                                                         │
//! │  Every mutation returns a CartEvent describing what happened; the      │
//! │  caller decides how to surface it (toast, log, nothing).               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Items are unique by `id`; adding the same id again increments quantity
//!   and leaves every other field of the existing entry untouched
//! - Insertion order is display order
//! - Totals are recomputed from the items on every read — they are never
//!   stored, so they can never drift out of sync
//! - All operations are total: absent ids are silent no-ops

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the cart.
///
/// ## Price Freezing
/// `price` is captured at the moment of adding. If the product's price later
/// changes (a material rate update, say), this entry keeps the price the
/// customer saw when they added it.
///
/// The optional `weight`/`material`/`making_charge` fields carry the pricing
/// context through for display and audit only — nothing recomputes a line
/// item's price from them.
///
/// This struct is also the persisted wire shape: an ordered JSON array of
/// these objects is what lands in local storage under the cart key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id; unique key within the cart.
    pub id: String,

    /// Product name at time of adding.
    pub name: String,

    /// Unit price in rupees at time of adding (frozen).
    pub price: f64,

    /// Thumbnail URL.
    pub image: String,

    /// Quantity in cart.
    pub quantity: i64,

    /// Weight in grams, carried through for display.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<f64>,

    /// Material slug, carried through for display.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub material: Option<String>,

    /// Raw making-charge figure, carried through for display.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub making_charge: Option<f64>,
}

impl CartItem {
    /// The line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Cart Event
// =============================================================================

/// What a cart mutation did, returned to the caller instead of firing a
/// notification from inside the aggregator.
///
/// The UI layer turns these into toasts ("Added Radiant Lotus to cart");
/// tests just assert on them.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CartEvent {
    /// A new line item was appended.
    Added { name: String },

    /// An existing line item's quantity changed.
    QuantityUpdated { name: String, quantity: i64 },

    /// A line item was removed.
    Removed { name: String },

    /// Every line item was removed.
    Cleared,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an ordered collection of line items.
///
/// The item collection is private — callers mutate only through the
/// operations below and read through [`items`](Cart::items), so the
/// uniqueness and ordering invariants cannot be broken from outside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Rebuilds a cart from persisted line items (restore-on-startup path).
    ///
    /// Duplicate ids in the input are collapsed the same way repeated adds
    /// would be, so a hand-edited or corrupted-but-parseable document still
    /// yields a cart that honors the uniqueness invariant.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add(item);
        }
        cart
    }

    /// Adds an item, or increments quantity if the id is already present.
    ///
    /// ## Behavior
    /// - Existing id: quantity += item.quantity; the stored price, name and
    ///   pricing context of the existing entry are left untouched
    ///   (price-at-add-time contract)
    /// - New id: appended at the end, preserving insertion order
    pub fn add(&mut self, item: CartItem) -> CartEvent {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
            return CartEvent::QuantityUpdated {
                name: existing.name.clone(),
                quantity: existing.quantity,
            };
        }

        let name = item.name.clone();
        self.items.push(item);
        CartEvent::Added { name }
    }

    /// Removes the item with the given id.
    ///
    /// Returns `None` (silent no-op) if the id is not in the cart.
    pub fn remove(&mut self, id: &str) -> Option<CartEvent> {
        let position = self.items.iter().position(|i| i.id == id)?;
        let removed = self.items.remove(position);
        Some(CartEvent::Removed { name: removed.name })
    }

    /// Sets an item's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly as [`remove`](Cart::remove)
    /// - Otherwise: sets the quantity (absolute set, not delta)
    /// - Absent id: silent no-op, returns `None`
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> Option<CartEvent> {
        if quantity <= 0 {
            return self.remove(id);
        }

        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.quantity = quantity;
        Some(CartEvent::QuantityUpdated {
            name: item.name.clone(),
            quantity,
        })
    }

    /// Removes every item.
    pub fn clear(&mut self) -> CartEvent {
        self.items.clear();
        CartEvent::Cleared
    }

    /// The line items in display (insertion) order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total price: Σ price × quantity over all items. Recomputed, never cached.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total item count: Σ quantity over all items. Recomputed, never cached.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Aggregate summary for the cart drawer badge and checkout footer.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ price × quantity.
    pub total: f64,

    /// Σ quantity.
    pub item_count: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            total: cart.total(),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
