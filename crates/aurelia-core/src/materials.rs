//! # Material Rate Table
//!
//! Reference data: the per-unit market rate for each material the pricing
//! engine can price against.
//!
//! ## Data Source
//! In production these rates come from an external price feed and are
//! refreshed by the back office (the "Material Prices" admin screen). The
//! seeded [`RateTable::reference`] table carries the same reference rates
//! the storefront ships with.
//!
//! ## Lookup Contract
//! The pricing engine's only contract with this table is synchronous
//! lookup-by-slug. An unknown slug resolves to a **zero rate**, never an
//! error — a wrong-looking breakdown beats a broken product page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Rate Unit
// =============================================================================

/// The unit a material is priced per.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// Metals: rupees per gram.
    PerGram,
    /// Gemstones: rupees per carat.
    PerCarat,
}

// =============================================================================
// Material
// =============================================================================

/// A material with its current market rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// URL-safe identifier products reference (e.g. "gold-22k").
    pub slug: String,

    /// Display name (e.g. "Gold 22K").
    pub name: String,

    /// Current rate in rupees per unit.
    pub rate: f64,

    /// Whether the rate is per gram or per carat.
    pub unit: RateUnit,

    /// When the rate was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Rate Table
// =============================================================================

/// An ordered collection of materials with lookup by slug.
///
/// Insertion order is preserved for the admin price table display.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    materials: Vec<Material>,
}

impl RateTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        RateTable::default()
    }

    /// Creates the table seeded with the storefront's reference rates.
    pub fn reference() -> Self {
        let now = Utc::now();
        let seed = |slug: &str, name: &str, rate: f64, unit: RateUnit| Material {
            slug: slug.to_string(),
            name: name.to_string(),
            rate,
            unit,
            updated_at: now,
        };

        RateTable {
            materials: vec![
                seed("gold-24k", "Gold 24K", 6500.0, RateUnit::PerGram),
                seed("gold-22k", "Gold 22K", 6000.0, RateUnit::PerGram),
                seed("gold-18k", "Gold 18K", 5000.0, RateUnit::PerGram),
                seed("silver", "Silver", 80.0, RateUnit::PerGram),
                seed("platinum", "Platinum", 3500.0, RateUnit::PerGram),
                seed("diamond", "Diamond", 50000.0, RateUnit::PerCarat),
            ],
        }
    }

    /// Looks up a material by slug.
    pub fn get(&self, slug: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.slug == slug)
    }

    /// Resolves a slug to its rate, falling back to zero for unknown slugs.
    ///
    /// ## Fallback Semantics
    /// Unknown materials are not an error: the caller gets a zero rate and
    /// the breakdown degrades gracefully. A diagnostic is emitted so the
    /// data problem is visible in logs.
    pub fn resolve(&self, slug: &str) -> f64 {
        match self.get(slug) {
            Some(material) => material.rate,
            None => {
                debug!(slug = %slug, "unknown material slug, resolving to zero rate");
                0.0
            }
        }
    }

    /// Inserts a material, replacing any existing entry with the same slug.
    pub fn insert(&mut self, material: Material) {
        if let Some(existing) = self.materials.iter_mut().find(|m| m.slug == material.slug) {
            *existing = material;
        } else {
            self.materials.push(material);
        }
    }

    /// Updates a material's rate and stamps the update time.
    ///
    /// Used by the back-office "Update Prices" flow; unlike [`resolve`],
    /// updating an unknown material is a real error.
    ///
    /// [`resolve`]: RateTable::resolve
    pub fn set_rate(&mut self, slug: &str, rate: f64) -> CoreResult<()> {
        let material = self
            .materials
            .iter_mut()
            .find(|m| m.slug == slug)
            .ok_or_else(|| CoreError::MaterialNotFound(slug.to_string()))?;

        material.rate = rate;
        material.updated_at = Utc::now();
        Ok(())
    }

    /// All materials in display order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Number of materials in the table.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Checks if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_rates() {
        let table = RateTable::reference();
        assert_eq!(table.resolve("gold-24k"), 6500.0);
        assert_eq!(table.resolve("gold-22k"), 6000.0);
        assert_eq!(table.resolve("gold-18k"), 5000.0);
        assert_eq!(table.resolve("silver"), 80.0);
        assert_eq!(table.resolve("platinum"), 3500.0);
        assert_eq!(table.resolve("diamond"), 50000.0);
    }

    #[test]
    fn test_unknown_slug_resolves_to_zero() {
        let table = RateTable::reference();
        assert_eq!(table.resolve("unobtanium"), 0.0);
        assert_eq!(table.resolve(""), 0.0);
    }

    #[test]
    fn test_diamond_is_per_carat() {
        let table = RateTable::reference();
        assert_eq!(table.get("diamond").map(|m| m.unit), Some(RateUnit::PerCarat));
        assert_eq!(table.get("silver").map(|m| m.unit), Some(RateUnit::PerGram));
    }

    #[test]
    fn test_set_rate_updates_rate_and_timestamp() {
        let mut table = RateTable::reference();
        let before = table.get("gold-22k").map(|m| m.updated_at);

        table.set_rate("gold-22k", 6100.0).unwrap();

        let material = table.get("gold-22k").unwrap();
        assert_eq!(material.rate, 6100.0);
        assert!(Some(material.updated_at) >= before);
    }

    #[test]
    fn test_set_rate_unknown_material_errors() {
        let mut table = RateTable::reference();
        let err = table.set_rate("gold-23k", 6100.0).unwrap_err();
        assert!(matches!(err, CoreError::MaterialNotFound(_)));
    }

    #[test]
    fn test_insert_replaces_same_slug() {
        let mut table = RateTable::reference();
        let count = table.len();

        table.insert(Material {
            slug: "silver".to_string(),
            name: "Silver 925".to_string(),
            rate: 85.0,
            unit: RateUnit::PerGram,
            updated_at: Utc::now(),
        });

        assert_eq!(table.len(), count);
        assert_eq!(table.resolve("silver"), 85.0);
        assert_eq!(table.get("silver").map(|m| m.name.as_str()), Some("Silver 925"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let table = RateTable::reference();
        let slugs: Vec<&str> = table.materials().iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["gold-24k", "gold-22k", "gold-18k", "silver", "platinum", "diamond"]
        );
    }
}
