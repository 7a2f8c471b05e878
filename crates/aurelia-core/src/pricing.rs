//! # Pricing Engine
//!
//! Computes a jewelry item's sale price from material rate, weight, and
//! making-charge policy, and produces the itemized breakdown shown on the
//! product detail page.
//!
//! ## Price Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Dynamic Pricing Flow                              │
//! │                                                                         │
//! │  RateTable ──resolve("gold-22k")──► ₹6,000/gram                        │
//! │                                         │                               │
//! │                                         ▼                               │
//! │  compute_price(6000, 4.5, Percent(12))                                 │
//! │       │                                                                 │
//! │       ├── material cost  = 6000 × 4.5      = ₹27,000                   │
//! │       ├── making charge  = 27000 × 12/100  =  ₹3,240                   │
//! │       └── computed total                   = ₹30,240                   │
//! │                                                                         │
//! │  explain_price(product, rates)                                         │
//! │       │                                                                 │
//! │       ├── lines: [Material Cost ₹27,000, Making Charge ₹3,240]         │
//! │       └── total: product.price  ◄── ALWAYS the stored price            │
//! │                                                                         │
//! │  |computed − stored| > ₹1  ──►  tracing::warn! (diagnostic only)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Reconciliation Rule
//! The one subtle contract in this module: the breakdown's **Total is the
//! stored price**, never the locally recomputed sum. Components are derived
//! from the live rate table and may drift from the stored price (stale rates,
//! rounded entry). Drift beyond [`crate::PRICE_TOLERANCE`] is logged; the
//! stored price is charged either way.
//!
//! ## Totality
//! Nothing in this module returns an error. Unknown materials resolve to a
//! zero rate, producing a degenerate breakdown rather than a failure. Inputs
//! are assumed pre-validated and non-negative (see [`crate::validation`]);
//! the engine does not clamp.

use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::materials::RateTable;
use crate::types::{PricingModel, Product};
use crate::PRICE_TOLERANCE;

// =============================================================================
// Making Charge
// =============================================================================

/// The artisan/labor fee applied on top of material cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MakingCharge {
    /// A flat amount in rupees.
    Flat(f64),

    /// A percentage of the material cost (12.0 = 12%).
    PercentOfMaterial(f64),
}

impl MakingCharge {
    /// The cost this charge adds for a given material cost.
    ///
    /// Zero weight ⇒ zero material cost ⇒ a percentage charge contributes
    /// nothing, while a flat charge still applies in full.
    #[inline]
    pub fn cost(&self, material_cost: f64) -> f64 {
        match *self {
            MakingCharge::Flat(amount) => amount,
            MakingCharge::PercentOfMaterial(pct) => material_cost * (pct / 100.0),
        }
    }

    /// The raw configured number (amount or percentage), used for the
    /// flat-rate check and for carrying context into cart line items.
    #[inline]
    pub fn raw_value(&self) -> f64 {
        match *self {
            MakingCharge::Flat(amount) => amount,
            MakingCharge::PercentOfMaterial(pct) => pct,
        }
    }
}

// =============================================================================
// Price Computation
// =============================================================================

/// Computes the sale price from a material rate, weight, and making charge.
///
/// ## Formula
/// ```text
/// material_cost = rate_per_unit × weight
/// total         = material_cost + making_charge.cost(material_cost)
/// ```
///
/// The result is a raw floating-point rupee amount; rounding and formatting
/// are presentation concerns (see [`crate::currency`]).
///
/// ## Example
/// ```rust
/// use aurelia_core::pricing::{compute_price, MakingCharge};
///
/// let pct = compute_price(6000.0, 4.5, MakingCharge::PercentOfMaterial(12.0));
/// assert_eq!(pct, 30240.0);
///
/// let flat = compute_price(80.0, 15.3, MakingCharge::Flat(500.0));
/// assert_eq!(flat, 80.0 * 15.3 + 500.0);
/// ```
#[inline]
pub fn compute_price(rate_per_unit: f64, weight: f64, making_charge: MakingCharge) -> f64 {
    let material_cost = rate_per_unit * weight;
    material_cost + making_charge.cost(material_cost)
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// One line of the displayed price breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BreakdownLine {
    /// A flat-rate product: the stored price, shown as a single line.
    FixedPrice { amount: f64 },

    /// Material cost with the inputs that produced it, so the UI can render
    /// "₹6,000/gram × 4.5 grams" under the amount.
    MaterialCost {
        material: String,
        rate_per_unit: f64,
        weight: f64,
        amount: f64,
    },

    /// Making charge; `percent` is present when the charge is a percentage
    /// of material cost, absent for flat charges.
    MakingChargeLine {
        #[serde(skip_serializing_if = "Option::is_none")]
        percent: Option<f64>,
        amount: f64,
    },
}

/// The itemized breakdown for a product detail page.
///
/// `total` is **always the stored price** (see module docs). The component
/// lines above it are locally derived and may not sum to it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub lines: Vec<BreakdownLine>,
    pub total: f64,
}

/// Produces the displayed price breakdown for a product.
///
/// ## Flat-Rate Determination
/// A product is shown as flat-rate when its pricing model is [`PricingModel::Flat`],
/// or when a dynamic policy is degenerate: zero/absent weight or a zero
/// making charge. This mirrors the storefront's behavior for incomplete
/// data — it degrades to a single "Fixed Price" line rather than failing.
///
/// ## Purity
/// This function is pure over its inputs: calling it twice with the same
/// product and rate table yields identical breakdowns. Its only side effect
/// is a diagnostic when the derived components disagree with the stored
/// price beyond [`PRICE_TOLERANCE`].
pub fn explain_price(product: &Product, rates: &RateTable) -> PriceBreakdown {
    let making_charge = match &product.pricing {
        PricingModel::Flat => {
            return PriceBreakdown {
                lines: vec![BreakdownLine::FixedPrice {
                    amount: product.price,
                }],
                total: product.price,
            };
        }
        PricingModel::Dynamic { making_charge } => *making_charge,
    };

    // Degenerate dynamic policies fall back to flat-rate display.
    if product.weight <= 0.0 || making_charge.raw_value() == 0.0 {
        return PriceBreakdown {
            lines: vec![BreakdownLine::FixedPrice {
                amount: product.price,
            }],
            total: product.price,
        };
    }

    let rate = rates.resolve(&product.material);
    let material_cost = rate * product.weight;
    let making_cost = making_charge.cost(material_cost);

    let computed_total = material_cost + making_cost;
    if (computed_total - product.price).abs() > PRICE_TOLERANCE {
        warn!(
            product_id = %product.id,
            computed = computed_total,
            stored = product.price,
            "price breakdown does not reconcile with stored price; using stored price for total"
        );
    }

    let percent = match making_charge {
        MakingCharge::PercentOfMaterial(pct) => Some(pct),
        MakingCharge::Flat(_) => None,
    };

    PriceBreakdown {
        lines: vec![
            BreakdownLine::MaterialCost {
                material: product.material_display_name(),
                rate_per_unit: rate,
                weight: product.weight,
                amount: material_cost,
            },
            BreakdownLine::MakingChargeLine {
                percent,
                amount: making_cost,
            },
        ],
        // The stored price is authoritative; never the recomputed sum.
        total: product.price,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PricingModel;

    fn dynamic_product(price: f64, material: &str, weight: f64, charge: MakingCharge) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Test Necklace".to_string(),
            description: String::new(),
            price,
            images: vec![],
            category: "necklace".to_string(),
            material: material.to_string(),
            weight,
            pricing: PricingModel::Dynamic {
                making_charge: charge,
            },
            in_stock: true,
            featured: false,
            is_new: false,
            collection: None,
            purity: None,
            dimensions: None,
        }
    }

    #[test]
    fn test_compute_price_percentage() {
        // rate*weight + rate*weight*charge/100
        let price = compute_price(6000.0, 4.5, MakingCharge::PercentOfMaterial(12.0));
        assert_eq!(price, 27000.0 + 3240.0);
    }

    #[test]
    fn test_compute_price_flat() {
        let price = compute_price(80.0, 15.3, MakingCharge::Flat(500.0));
        assert_eq!(price, 80.0 * 15.3 + 500.0);
    }

    #[test]
    fn test_compute_price_zero_weight() {
        // Zero weight ⇒ zero material cost. A percentage charge contributes
        // nothing; a flat charge still applies.
        assert_eq!(
            compute_price(6000.0, 0.0, MakingCharge::PercentOfMaterial(12.0)),
            0.0
        );
        assert_eq!(compute_price(6000.0, 0.0, MakingCharge::Flat(500.0)), 500.0);
    }

    #[test]
    fn test_compute_price_zero_rate() {
        // Unknown materials resolve to rate 0 upstream; the engine itself
        // just produces the degenerate arithmetic.
        assert_eq!(
            compute_price(0.0, 4.5, MakingCharge::PercentOfMaterial(12.0)),
            0.0
        );
    }

    #[test]
    fn test_explain_price_gold_scenario() {
        // gold-22k at ₹6,000/gram, 4.5g, 12% making charge.
        let product = dynamic_product(
            30240.0,
            "gold-22k",
            4.5,
            MakingCharge::PercentOfMaterial(12.0),
        );
        let breakdown = explain_price(&product, &RateTable::reference());

        assert_eq!(breakdown.lines.len(), 2);
        assert_eq!(
            breakdown.lines[0],
            BreakdownLine::MaterialCost {
                material: "Gold 22k".to_string(),
                rate_per_unit: 6000.0,
                weight: 4.5,
                amount: 27000.0,
            }
        );
        assert_eq!(
            breakdown.lines[1],
            BreakdownLine::MakingChargeLine {
                percent: Some(12.0),
                amount: 3240.0,
            }
        );
        assert_eq!(breakdown.total, 30240.0);
    }

    #[test]
    fn test_explain_price_flat_product() {
        let mut product = dynamic_product(25000.0, "gold-18k", 12.0, MakingCharge::Flat(500.0));
        product.pricing = PricingModel::Flat;

        let breakdown = explain_price(&product, &RateTable::reference());
        assert_eq!(
            breakdown.lines,
            vec![BreakdownLine::FixedPrice { amount: 25000.0 }]
        );
        assert_eq!(breakdown.total, 25000.0);
    }

    #[test]
    fn test_explain_price_degenerate_dynamic_falls_back_to_flat() {
        // Zero weight or zero charge renders as a fixed price.
        let zero_weight =
            dynamic_product(9000.0, "gold-22k", 0.0, MakingCharge::PercentOfMaterial(12.0));
        let breakdown = explain_price(&zero_weight, &RateTable::reference());
        assert_eq!(
            breakdown.lines,
            vec![BreakdownLine::FixedPrice { amount: 9000.0 }]
        );

        let zero_charge = dynamic_product(9000.0, "gold-22k", 4.5, MakingCharge::Flat(0.0));
        let breakdown = explain_price(&zero_charge, &RateTable::reference());
        assert_eq!(
            breakdown.lines,
            vec![BreakdownLine::FixedPrice { amount: 9000.0 }]
        );
    }

    #[test]
    fn test_explain_price_trusts_stored_total_on_mismatch() {
        // Stored price deliberately disagrees with the derived components.
        // The total must still be the stored price.
        let product = dynamic_product(
            85000.0,
            "gold-22k",
            4.5,
            MakingCharge::PercentOfMaterial(12.0),
        );
        let breakdown = explain_price(&product, &RateTable::reference());
        assert_eq!(breakdown.total, 85000.0);
        assert_eq!(
            breakdown.lines[0],
            BreakdownLine::MaterialCost {
                material: "Gold 22k".to_string(),
                rate_per_unit: 6000.0,
                weight: 4.5,
                amount: 27000.0,
            }
        );
    }

    #[test]
    fn test_explain_price_unknown_material_zero_rate() {
        // Unknown slug → zero rate → degenerate (but non-failing) breakdown.
        let product = dynamic_product(
            10000.0,
            "unobtanium",
            4.5,
            MakingCharge::PercentOfMaterial(12.0),
        );
        let breakdown = explain_price(&product, &RateTable::reference());
        assert_eq!(
            breakdown.lines[0],
            BreakdownLine::MaterialCost {
                material: "Unobtanium".to_string(),
                rate_per_unit: 0.0,
                weight: 4.5,
                amount: 0.0,
            }
        );
        assert_eq!(breakdown.total, 10000.0);
    }

    #[test]
    fn test_explain_price_is_idempotent() {
        let product = dynamic_product(
            30240.0,
            "gold-22k",
            4.5,
            MakingCharge::PercentOfMaterial(12.0),
        );
        let rates = RateTable::reference();
        assert_eq!(explain_price(&product, &rates), explain_price(&product, &rates));
    }
}
