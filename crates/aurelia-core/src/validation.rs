//! # Validation Module
//!
//! Input validation for the admin forms (product editor, material price
//! update, variant table).
//!
//! ## Where Validation Sits
//! The pricing engine and cart aggregator assume pre-validated inputs and
//! never validate or clamp themselves (their contracts are total). These
//! validators are the gate in front of them: admin form handlers call them
//! before constructing domain values.
//!
//! ## Usage
//! ```rust
//! use aurelia_core::validation::{validate_weight, validate_quantity};
//!
//! validate_weight(4.5).unwrap();
//! validate_quantity(2).unwrap();
//! assert!(validate_weight(-1.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a slug (material, category, product id).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Lowercase alphanumeric plus hyphens (e.g. "gold-22k")
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    let slug = slug.trim();

    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: "slug".to_string(),
        });
    }

    if slug.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "slug".to_string(),
            max: 50,
        });
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must contain only lowercase letters, digits, and hyphens".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart/order quantity.
///
/// ## Rules
/// - Must be positive (> 0); zero means "remove" and is handled by the cart
///   itself, so it never passes through a form
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a weight in grams (or carats).
///
/// ## Rules
/// - Must be finite
/// - Must be positive; dynamically priced products require weight > 0
pub fn validate_weight(weight: f64) -> ValidationResult<()> {
    if !weight.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "weight".to_string(),
        });
    }

    if weight <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "weight".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in rupees.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative; zero is allowed (placeholder during entry)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a making charge (flat amount or percentage figure).
///
/// ## Rules
/// - Must be finite and non-negative
/// - Percentages above 100 are accepted: a making charge larger than the
///   material cost is unusual but legitimate for intricate pieces
pub fn validate_making_charge(charge: f64) -> ValidationResult<()> {
    if !charge.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "making charge".to_string(),
        });
    }

    if charge < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "making charge".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Radiant Lotus Gold Necklace").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("gold-22k").is_ok());
        assert!(validate_slug("silver").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Gold-22K").is_err());
        assert!(validate_slug("has space").is_err());
        assert!(validate_slug(&"a".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(4.5).is_ok());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(85000.0).is_ok());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(-100.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_making_charge() {
        assert!(validate_making_charge(12.0).is_ok());
        assert!(validate_making_charge(0.0).is_ok());
        assert!(validate_making_charge(150.0).is_ok());
        assert!(validate_making_charge(-5.0).is_err());
        assert!(validate_making_charge(f64::NAN).is_err());
    }
}
