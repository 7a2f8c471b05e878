//! # Catalog Filtering & Sorting
//!
//! The product listing page's filter sidebar and sort dropdown, as pure
//! functions over a product slice.
//!
//! ## Filter Pipeline
//! ```text
//! products ─► category ─► collection ─► materials ─► price range
//!          ─► search (name + description) ─► in stock ─► dynamic only
//!          ─► sort ─► filtered list
//! ```
//!
//! All filters are conjunctive. An unset filter passes everything.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ts_rs::TS;

use crate::types::Product;

// =============================================================================
// Sort Key
// =============================================================================

/// Catalog sort orders offered by the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first, otherwise catalog order. The default.
    #[default]
    Featured,
    /// New arrivals first, otherwise catalog order.
    Newest,
    /// Price low to high.
    PriceAsc,
    /// Price high to low.
    PriceDesc,
    /// Name A to Z.
    NameAsc,
    /// Name Z to A.
    NameDesc,
}

// =============================================================================
// Product Filter
// =============================================================================

/// The listing page's filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    /// Restrict to one category slug.
    pub category: Option<String>,

    /// Restrict to one collection name.
    pub collection: Option<String>,

    /// Restrict to any of these material slugs; empty means all materials.
    pub materials: Vec<String>,

    /// Inclusive lower price bound.
    pub price_min: f64,

    /// Inclusive upper price bound; `None` means unbounded.
    pub price_max: Option<f64>,

    /// Case-insensitive substring match over name and description.
    pub search: Option<String>,

    /// Only show purchasable products. On by default.
    pub in_stock_only: bool,

    /// Only show dynamically priced products.
    pub dynamic_only: bool,

    /// Sort order applied after filtering.
    pub sort: SortKey,
}

impl Default for ProductFilter {
    fn default() -> Self {
        ProductFilter {
            category: None,
            collection: None,
            materials: Vec::new(),
            price_min: 0.0,
            price_max: None,
            search: None,
            in_stock_only: true,
            dynamic_only: false,
            sort: SortKey::Featured,
        }
    }
}

impl ProductFilter {
    /// Checks whether one product passes every active filter.
    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(collection) = &self.collection {
            if product.collection.as_ref() != Some(collection) {
                return false;
            }
        }

        if !self.materials.is_empty() && !self.materials.contains(&product.material) {
            return false;
        }

        if product.price < self.price_min {
            return false;
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let term = search.to_lowercase();
            if !term.is_empty()
                && !product.name.to_lowercase().contains(&term)
                && !product.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        if self.in_stock_only && !product.in_stock {
            return false;
        }

        if self.dynamic_only && !product.pricing.is_dynamic() {
            return false;
        }

        true
    }

    /// Filters and sorts a catalog slice.
    ///
    /// Featured/Newest are stable partitions (matching products first, each
    /// side keeping catalog order); the other sorts are total orders.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Featured => result.sort_by_key(|p| !p.featured),
            SortKey::Newest => result.sort_by_key(|p| !p.is_new),
            SortKey::PriceAsc => result.sort_by(|a, b| compare_price(a, b)),
            SortKey::PriceDesc => result.sort_by(|a, b| compare_price(b, a)),
            SortKey::NameAsc => result.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::NameDesc => result.sort_by(|a, b| b.name.cmp(&a.name)),
        }

        result
    }
}

/// Price comparison that tolerates the (never expected) NaN by treating the
/// operands as equal instead of panicking.
fn compare_price(a: &Product, b: &Product) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::MakingCharge;
    use crate::types::PricingModel;

    fn product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            images: vec![],
            category: "necklace".to_string(),
            material: "gold-22k".to_string(),
            weight: 10.0,
            pricing: PricingModel::Flat,
            in_stock: true,
            featured: false,
            is_new: false,
            collection: None,
            purity: None,
            dimensions: None,
        }
    }

    fn sample_catalog() -> Vec<Product> {
        let mut necklace = product("p1", "Radiant Lotus Gold Necklace", 85000.0);
        necklace.featured = true;
        necklace.pricing = PricingModel::Dynamic {
            making_charge: MakingCharge::PercentOfMaterial(12.0),
        };
        necklace.collection = Some("Floral Symphony".to_string());

        let mut earrings = product("p2", "Diamond Constellation Earrings", 45000.0);
        earrings.category = "earrings".to_string();
        earrings.material = "gold-18k".to_string();
        earrings.is_new = true;

        let mut bracelet = product("p3", "Silver Infinity Bracelet", 5500.0);
        bracelet.category = "bracelets".to_string();
        bracelet.material = "silver".to_string();

        let mut sold_out = product("p4", "Antique Temple Pendant", 32000.0);
        sold_out.in_stock = false;

        vec![necklace, earrings, bracelet, sold_out]
    }

    #[test]
    fn test_default_filter_hides_out_of_stock() {
        let filter = ProductFilter::default();
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.in_stock));
    }

    #[test]
    fn test_filter_by_category() {
        let filter = ProductFilter {
            category: Some("earrings".to_string()),
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p2");
    }

    #[test]
    fn test_filter_by_materials() {
        let filter = ProductFilter {
            materials: vec!["silver".to_string(), "platinum".to_string()],
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p3");
    }

    #[test]
    fn test_filter_by_price_range() {
        let filter = ProductFilter {
            price_min: 10000.0,
            price_max: Some(50000.0),
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p2");
    }

    #[test]
    fn test_filter_by_search_matches_name_case_insensitive() {
        let filter = ProductFilter {
            search: Some("LOTUS".to_string()),
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");
    }

    #[test]
    fn test_filter_dynamic_only() {
        let filter = ProductFilter {
            dynamic_only: true,
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");
    }

    #[test]
    fn test_filter_by_collection() {
        let filter = ProductFilter {
            collection: Some("Floral Symphony".to_string()),
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "p1");
    }

    #[test]
    fn test_sort_price_asc_and_desc() {
        let asc = ProductFilter {
            sort: SortKey::PriceAsc,
            ..ProductFilter::default()
        }
        .apply(&sample_catalog());
        let prices: Vec<f64> = asc.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![5500.0, 45000.0, 85000.0]);

        let desc = ProductFilter {
            sort: SortKey::PriceDesc,
            ..ProductFilter::default()
        }
        .apply(&sample_catalog());
        let prices: Vec<f64> = desc.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![85000.0, 45000.0, 5500.0]);
    }

    #[test]
    fn test_sort_featured_partitions_stably() {
        let result = ProductFilter::default().apply(&sample_catalog());
        assert!(result[0].featured);
        // Non-featured products keep their catalog order.
        assert_eq!(result[1].id, "p2");
        assert_eq!(result[2].id, "p3");
    }

    #[test]
    fn test_sort_newest_first() {
        let filter = ProductFilter {
            sort: SortKey::Newest,
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result[0].id, "p2");
    }

    #[test]
    fn test_sort_by_name() {
        let filter = ProductFilter {
            sort: SortKey::NameAsc,
            ..ProductFilter::default()
        };
        let result = filter.apply(&sample_catalog());
        assert_eq!(result[0].id, "p2"); // Diamond…
        assert_eq!(result[1].id, "p1"); // Radiant…
        assert_eq!(result[2].id, "p3"); // Silver…
    }
}
