//! # Error Types
//!
//! Domain-specific error types for aurelia-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aurelia-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  aurelia-store errors (separate crate)                                 │
//! │  └── StoreError       - Persistence failures                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that the pricing engine and the cart aggregator are deliberately
//! **total**: they never return errors. Bad or missing data degrades to a
//! documented fallback (zero rate, silent no-op) with a tracing diagnostic.
//! `CoreError` covers the admin-side operations that genuinely can fail.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (slug, field name, etc.)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Material slug does not exist in the rate table.
    ///
    /// ## When This Occurs
    /// - Admin tries to update the rate of a material that was never added
    ///
    /// Note: *resolving* a rate for pricing never produces this error; an
    /// unknown slug resolves to a zero rate by design.
    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    /// Variant generation was requested with no attribute values selected.
    #[error("At least one attribute value must be selected to generate variations")]
    NoAttributeValues,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when admin-form input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Invalid format (e.g., bad slug characters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::MaterialNotFound("gold-23k".to_string());
        assert_eq!(err.to_string(), "Material not found: gold-23k");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "weight".to_string(),
        };
        assert_eq!(err.to_string(), "weight must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "slug".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
