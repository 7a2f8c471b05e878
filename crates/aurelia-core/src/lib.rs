//! # aurelia-core: Pure Business Logic for Aurelia Jewels
//!
//! This crate is the **heart** of the Aurelia Jewels storefront. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aurelia Jewels Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront / Admin UI                          │   │
//! │  │   Listing ──► Detail ──► Price Breakdown ──► Cart Drawer       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ TypeScript bindings                    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ aurelia-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │   cart    │  │  catalog  │  │ variants  │  │   │
//! │  │   │ breakdown │  │ CartItem  │  │  filters  │  │ attribute │  │   │
//! │  │   │ rate calc │  │  events   │  │  sorting  │  │  combos   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 aurelia-store (Persistence Layer)               │   │
//! │  │          Cart persistence, product/order repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, PricingModel, Order, etc.)
//! - [`pricing`] - The dynamic pricing engine and price breakdowns
//! - [`materials`] - Material rate table (reference data)
//! - [`cart`] - The cart aggregator
//! - [`catalog`] - Product filtering and sorting
//! - [`variants`] - Attribute combination generation for the admin UI
//! - [`currency`] - INR formatting (the presentation boundary)
//! - [`validation`] - Input validation for admin forms
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Total Operations**: pricing and cart operations never fail; bad data
//!    degrades to documented fallbacks with a diagnostic, never a panic
//! 4. **Stored Price Wins**: a product's stored price is always the charged
//!    amount; computed breakdowns are for display and reconciliation only
//!
//! ## Example Usage
//!
//! ```rust
//! use aurelia_core::pricing::{compute_price, MakingCharge};
//!
//! // 4.5 grams of 22K gold at ₹6,000/gram with a 12% making charge
//! let price = compute_price(6000.0, 4.5, MakingCharge::PercentOfMaterial(12.0));
//! assert_eq!(price, 30240.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod currency;
pub mod error;
pub mod materials;
pub mod pricing;
pub mod types;
pub mod validation;
pub mod variants;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use aurelia_core::Cart` instead of
// `use aurelia_core::cart::Cart`

pub use cart::{Cart, CartEvent, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use materials::{Material, RateTable, RateUnit};
pub use pricing::{compute_price, explain_price, MakingCharge, PriceBreakdown};
pub use types::{PricingModel, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tolerance (in rupees) between a dynamically computed price and the stored
/// price before a data-consistency diagnostic is emitted.
///
/// ## Why a tolerance?
/// Breakdown components are recomputed from the live material rate at display
/// time, while the stored price may have been captured against an older rate
/// or rounded during entry. Differences up to one rupee are expected noise;
/// anything larger is logged as a mismatch. The stored price is charged
/// either way.
pub const PRICE_TOLERANCE: f64 = 1.0;
