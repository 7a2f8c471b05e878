//! # Variant Generation
//!
//! The admin "Generate Variations" flow: given the attribute values an
//! admin ticked (Size: 16"/18", Finish: Matte/Polished, …), enumerate the
//! Cartesian product and create one editable variant row per combination.
//!
//! Attribute counts are small and bounded (a handful of attributes with a
//! handful of values each), so eager enumeration is fine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::PricingModel;

// =============================================================================
// Attribute Selection
// =============================================================================

/// An attribute with the values selected for variant generation.
///
/// An attribute with no selected values is skipped entirely — it does not
/// contribute a dimension to the product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSelection {
    /// Attribute name (e.g. "Size").
    pub name: String,

    /// The values ticked by the admin (e.g. ["16 inch", "18 inch"]).
    pub selected_values: Vec<String>,
}

// =============================================================================
// Variant
// =============================================================================

/// One generated product variant, ready for the admin to price and stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Generated identifier.
    pub id: String,

    /// Attribute name → selected value for this combination.
    pub attributes: BTreeMap<String, String>,

    /// Placeholder SKU ("SKU-1", "SKU-2", …) for the admin to replace.
    pub sku: String,

    /// Price, unset until the admin fills it in.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price: Option<f64>,

    /// Stock on hand; defaults to 1.
    pub stock: i64,

    /// Pricing policy; defaults to flat until the admin opts into dynamic.
    pub pricing: PricingModel,
}

// =============================================================================
// Generation
// =============================================================================

/// Enumerates every combination of the selected attribute values.
///
/// ## Behavior
/// - Attributes with no selected values are skipped
/// - If nothing is selected at all, returns [`CoreError::NoAttributeValues`]
///   (the admin UI surfaces this as a form error)
/// - Combination order: first attribute varies slowest, matching the order
///   the admin arranged the attributes in
///
/// ## Example
/// ```rust
/// use aurelia_core::variants::{generate_variants, AttributeSelection};
///
/// let selections = vec![
///     AttributeSelection {
///         name: "Size".to_string(),
///         selected_values: vec!["16 inch".to_string(), "18 inch".to_string()],
///     },
///     AttributeSelection {
///         name: "Finish".to_string(),
///         selected_values: vec!["Matte".to_string()],
///     },
/// ];
///
/// let variants = generate_variants(&selections).unwrap();
/// assert_eq!(variants.len(), 2);
/// ```
pub fn generate_variants(selections: &[AttributeSelection]) -> CoreResult<Vec<Variant>> {
    let active: Vec<&AttributeSelection> = selections
        .iter()
        .filter(|s| !s.selected_values.is_empty())
        .collect();

    if active.is_empty() {
        return Err(CoreError::NoAttributeValues);
    }

    let mut combinations: Vec<BTreeMap<String, String>> = vec![BTreeMap::new()];
    for attribute in &active {
        let mut expanded = Vec::with_capacity(combinations.len() * attribute.selected_values.len());
        for combination in &combinations {
            for value in &attribute.selected_values {
                let mut next = combination.clone();
                next.insert(attribute.name.clone(), value.clone());
                expanded.push(next);
            }
        }
        combinations = expanded;
    }

    Ok(combinations
        .into_iter()
        .enumerate()
        .map(|(index, attributes)| Variant {
            id: Uuid::new_v4().to_string(),
            attributes,
            sku: format!("SKU-{}", index + 1),
            price: None,
            stock: 1,
            pricing: PricingModel::Flat,
        })
        .collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(name: &str, values: &[&str]) -> AttributeSelection {
        AttributeSelection {
            name: name.to_string(),
            selected_values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_cartesian_product_size() {
        let selections = vec![
            selection("Size", &["16 inch", "18 inch"]),
            selection("Finish", &["Matte", "Polished", "Hammered"]),
        ];

        let variants = generate_variants(&selections).unwrap();
        assert_eq!(variants.len(), 6);

        // Every combination appears exactly once.
        let mut seen: Vec<(String, String)> = variants
            .iter()
            .map(|v| {
                (
                    v.attributes["Size"].clone(),
                    v.attributes["Finish"].clone(),
                )
            })
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_first_attribute_varies_slowest() {
        let selections = vec![
            selection("Size", &["S", "L"]),
            selection("Finish", &["Matte", "Polished"]),
        ];

        let variants = generate_variants(&selections).unwrap();
        let order: Vec<(&str, &str)> = variants
            .iter()
            .map(|v| {
                (
                    v.attributes["Size"].as_str(),
                    v.attributes["Finish"].as_str(),
                )
            })
            .collect();
        assert_eq!(
            order,
            vec![
                ("S", "Matte"),
                ("S", "Polished"),
                ("L", "Matte"),
                ("L", "Polished"),
            ]
        );
    }

    #[test]
    fn test_skips_attributes_without_selections() {
        let selections = vec![
            selection("Size", &["16 inch"]),
            selection("Finish", &[]),
        ];

        let variants = generate_variants(&selections).unwrap();
        assert_eq!(variants.len(), 1);
        assert!(!variants[0].attributes.contains_key("Finish"));
    }

    #[test]
    fn test_no_selections_is_an_error() {
        let err = generate_variants(&[selection("Size", &[])]).unwrap_err();
        assert!(matches!(err, CoreError::NoAttributeValues));

        let err = generate_variants(&[]).unwrap_err();
        assert!(matches!(err, CoreError::NoAttributeValues));
    }

    #[test]
    fn test_variant_defaults() {
        let variants = generate_variants(&[selection("Size", &["S", "M"])]).unwrap();

        assert_eq!(variants[0].sku, "SKU-1");
        assert_eq!(variants[1].sku, "SKU-2");
        for variant in &variants {
            assert_eq!(variant.price, None);
            assert_eq!(variant.stock, 1);
            assert_eq!(variant.pricing, PricingModel::Flat);
        }
        // Generated ids are unique.
        assert_ne!(variants[0].id, variants[1].id);
    }
}
