//! # aurelia-store: Persistence Layer for Aurelia Jewels
//!
//! This crate provides local persistence and data access for the storefront.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aurelia Jewels Data Flow                            │
//! │                                                                         │
//! │  UI action (add to cart, open site)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  aurelia-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CartSession  │    │   CartStore   │    │ Repositories │  │   │
//! │  │   │  (session.rs) │───►│(cart_store.rs)│    │ product.rs   │  │   │
//! │  │   │               │    │               │    │ order.rs     │  │   │
//! │  │   │ live Cart +   │    │ cart.json     │    │ seeded mock  │  │   │
//! │  │   │ write-through │    │ under a key   │    │ catalog      │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Local storage directory (one file per key)            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`cart_store`] - The persisted cart document (load / save / discard)
//! - [`session`] - CartSession: live cart with write-through persistence
//! - [`repository`] - Product and order data seams with seeded mock data
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use aurelia_store::{CartSession, CartStore};
//!
//! let store = CartStore::open("./data")?;
//! let mut session = CartSession::open(store);
//!
//! let event = session.add(item)?;        // persisted before returning
//! println!("total: {}", session.cart().total());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod repository;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use error::StoreError;
pub use session::CartSession;

// Repository re-exports for convenience
pub use repository::order::{InMemoryOrderRepository, OrderRepository};
pub use repository::product::{InMemoryProductRepository, ProductRepository};
