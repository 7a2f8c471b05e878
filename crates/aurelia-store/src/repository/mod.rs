//! # Repositories
//!
//! Data-access seams for product and order data.
//!
//! The storefront and admin screens consume these traits; the seeded
//! in-memory implementations stand in for a real backend. When one arrives,
//! it implements the same traits and nothing upstream changes.

pub mod order;
pub mod product;

pub use order::{InMemoryOrderRepository, OrderRepository};
pub use product::{InMemoryProductRepository, ProductRepository};
