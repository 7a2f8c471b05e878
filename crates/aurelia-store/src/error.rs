//! # Store Error Types
//!
//! Error types for persistence operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller logs or surfaces                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note the asymmetry baked into the cart contract: **reads never fail**
//! (a malformed persisted cart is discarded wholesale and the session
//! starts empty), while **writes propagate** — a full disk should be
//! visible to the caller, not swallowed.

use thiserror::Error;

/// Persistence operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage directory could not be created or written.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be serialized.
    ///
    /// ## When This Occurs
    /// Practically never for the cart document (plain structs), but the
    /// variant keeps serialization failures typed instead of panicking.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = StoreError::from(io);
        assert!(err.to_string().starts_with("storage I/O failed"));
    }
}
