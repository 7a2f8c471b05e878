//! # Domain Types
//!
//! Core domain types used throughout Aurelia Jewels.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  PricingModel   │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Flat           │   │  id             │       │
//! │  │  name           │   │  Dynamic {      │   │  customer       │       │
//! │  │  price (stored) │   │    making_charge│   │  total          │       │
//! │  │  material       │   │  }              │   │  status         │       │
//! │  │  weight         │   └─────────────────┘   └─────────────────┘       │
//! │  │  pricing ───────┼──────────┘                                        │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Stored Price
//! Every product carries a stored `price`, even when its pricing model is
//! dynamic. The stored price is the authoritative charged amount; the
//! dynamic policy only drives the displayed breakdown (see [`crate::pricing`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pricing::MakingCharge;

// =============================================================================
// Pricing Model
// =============================================================================

/// How a product's displayed price breakdown is derived.
///
/// ## Why a tagged variant?
/// The storefront needs to branch on "flat rate vs dynamic" in several
/// places (detail page, breakdown sheet, admin pricing tab). Encoding the
/// policy as an enum makes every branch an exhaustive match instead of a
/// chain of optional-field checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PricingModel {
    /// The stored price is used verbatim; no breakdown components exist.
    Flat,

    /// The price is derived from material rate × weight plus a making
    /// charge. The stored price remains the charged amount; the derivation
    /// feeds the displayed breakdown.
    Dynamic { making_charge: MakingCharge },
}

impl PricingModel {
    /// Checks whether this is the dynamic policy.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, PricingModel::Dynamic { .. })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A jewelry product in the catalog.
///
/// ## Field Notes
/// - `price`: stored currency amount in rupees. Always present, always the
///   amount charged at sale time, regardless of pricing model.
/// - `material` / `weight`: physical attributes, shown on the detail page
///   and used for filtering. For dynamically priced products they also
///   drive the breakdown.
/// - `purity` / `dimensions`: optional; simply omitted from display when
///   absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Marketing description (searched by the catalog filter).
    pub description: String,

    /// Stored price in rupees. The authoritative charged amount.
    pub price: f64,

    /// Image URLs; the first is the listing thumbnail.
    pub images: Vec<String>,

    /// Category slug (necklace, earrings, rings, bracelets).
    pub category: String,

    /// Material slug (e.g. "gold-22k"), resolved against the rate table.
    pub material: String,

    /// Weight in grams (carats for gem materials).
    pub weight: f64,

    /// Pricing policy for this product.
    pub pricing: PricingModel,

    /// Whether the product is currently purchasable.
    pub in_stock: bool,

    /// Featured on the home page and sorted first by default.
    pub featured: bool,

    /// Part of the "new arrivals" set.
    pub is_new: bool,

    /// Optional collection name (e.g. "Floral Symphony").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub collection: Option<String>,

    /// Optional purity marking (e.g. "22K", "925 Sterling").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub purity: Option<String>,

    /// Optional physical dimensions for display.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dimensions: Option<String>,
}

impl Product {
    /// Returns the listing thumbnail, if any image exists.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Formats the material slug for display ("gold-22k" → "Gold 22k").
    pub fn material_display_name(&self) -> String {
        let mut chars = self.material.chars();
        match chars.next() {
            Some(first) => {
                first.to_uppercase().collect::<String>() + &chars.as_str().replace('-', " ")
            }
            None => String::new(),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category shown in the storefront navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// URL-safe identifier (e.g. "necklace").
    pub slug: String,

    /// Display name (e.g. "Necklaces").
    pub name: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// Fulfilment status of a customer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Payment received, not yet dispatched.
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Confirmed delivered.
    Delivered,
    /// Cancelled before dispatch.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a customer paid for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Upi,
    BankTransfer,
}

// =============================================================================
// Order
// =============================================================================

/// A customer order as shown in the back-office order manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-readable order reference (e.g. "#ORD-001").
    pub id: String,

    /// Customer display name.
    pub customer: String,

    /// Order date.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Order total in rupees.
    pub total: f64,

    /// Fulfilment status.
    pub status: OrderStatus,

    /// Payment method used.
    pub payment_method: PaymentMethod,
}

// =============================================================================
// Unit Tests
// =============================================================================
