//! # Cart Store
//!
//! Persists the cart's line items as a JSON document under a well-known
//! key, mirroring the storefront's local-storage contract.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Persistence                                     │
//! │                                                                         │
//! │  Session start ──► load()                                              │
//! │                      ├── no document        → empty cart               │
//! │                      ├── valid JSON array   → restored items           │
//! │                      └── malformed document → DISCARD WHOLESALE,       │
//! │                                               warn!, empty cart        │
//! │                                                                         │
//! │  Every mutation ──► save(items)  (write-through, whole document)       │
//! │                                                                         │
//! │  Document shape: [{id, name, price, image, quantity,                   │
//! │                    weight?, material?, makingCharge?}, ...]            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no schema versioning and no partial recovery — a document that
//! fails to parse is removed and the user starts with an empty cart. This
//! is a storefront display cart, not a system of record.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use aurelia_core::cart::CartItem;

use crate::error::StoreError;

/// The well-known key the cart document is stored under.
pub const CART_STORAGE_KEY: &str = "cart";

/// File-backed key/value document storage for the cart.
///
/// One file per key inside a storage directory — the desktop analog of
/// `localStorage.setItem(key, json)`.
#[derive(Debug, Clone)]
pub struct CartStore {
    dir: PathBuf,
}

impl CartStore {
    /// Opens (creating if needed) a storage directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(CartStore { dir })
    }

    /// Loads the persisted line items.
    ///
    /// Always succeeds: a missing document yields an empty list, and a
    /// malformed document is discarded wholesale (with a diagnostic) rather
    /// than partially recovered.
    pub fn load(&self) -> Vec<CartItem> {
        let path = self.document_path();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no persisted cart found, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "failed to read persisted cart, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) => {
                debug!(items = items.len(), "restored persisted cart");
                items
            }
            Err(e) => {
                warn!(error = %e, "persisted cart is malformed, discarding");
                self.discard();
                Vec::new()
            }
        }
    }

    /// Writes the full line-item list, replacing the previous document.
    pub fn save(&self, items: &[CartItem]) -> Result<(), StoreError> {
        let json = serde_json::to_string(items)?;
        fs::write(self.document_path(), json)?;
        Ok(())
    }

    /// Removes the persisted document entirely.
    ///
    /// A missing document is fine; other failures are logged and swallowed
    /// — the next save overwrites whatever is there anyway.
    pub fn discard(&self) {
        if let Err(e) = fs::remove_file(self.document_path()) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(error = %e, "failed to remove persisted cart");
            }
        }
    }

    fn document_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", CART_STORAGE_KEY))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
