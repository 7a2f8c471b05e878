//! # Product Repository
//!
//! Catalog data access for the storefront and the admin product manager.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Catalog Search Works                             │
//! │                                                                         │
//! │  User types: "gold"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive substring match across: name, description            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ Radiant Lotus Gold Necklace             │ ← MATCH (name)           │
//! │  │ Traditional Gold Anklet                 │ ← MATCH (name)           │
//! │  │ Pearl Harmony Necklace ("gold clasp")   │ ← MATCH (description)    │
//! │  │ Silver Infinity Bracelet                │                           │
//! │  └─────────────────────────────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Substring scan is fine at catalog scale (tens of products); a backed
//! store would swap in an indexed search behind the same trait.

use tracing::debug;

use aurelia_core::pricing::MakingCharge;
use aurelia_core::types::{Category, PricingModel, Product};

/// Read access to the product catalog.
///
/// The storefront (listing, detail page, search bar) programs against this
/// trait; [`InMemoryProductRepository`] is the seeded implementation.
pub trait ProductRepository {
    /// All products, in catalog order.
    fn list(&self) -> Vec<Product>;

    /// Looks up a single product by id.
    fn get(&self, id: &str) -> Option<Product>;

    /// Case-insensitive substring search across name and description.
    /// An empty or whitespace query returns the full catalog.
    fn search(&self, query: &str) -> Vec<Product>;
}

/// Seeded in-memory product catalog.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InMemoryProductRepository::seeded();
/// let necklace = repo.get("p1").unwrap();
/// let hits = repo.search("gold");
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        InMemoryProductRepository { products: Vec::new() }
    }

    /// Creates a repository pre-loaded with the reference catalog.
    pub fn seeded() -> Self {
        let repo = InMemoryProductRepository {
            products: seed_products(),
        };
        debug!(count = repo.products.len(), "seeded product catalog");
        repo
    }

    /// Adds a product. Replaces any existing product with the same id.
    pub fn insert(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product,
            None => self.products.push(product),
        }
    }

    /// Removes a product by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    /// Distinct category slugs with display names, in catalog order.
    pub fn categories(&self) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for product in &self.products {
            if out.iter().any(|c| c.slug == product.category) {
                continue;
            }
            out.push(Category {
                slug: product.category.clone(),
                name: category_display_name(&product.category),
            });
        }
        out
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn get(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.list();
        }

        let hits: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();

        debug!(query = %query, count = hits.len(), "catalog search");
        hits
    }
}

/// Formats a category slug for navigation ("necklace" → "Necklaces").
fn category_display_name(slug: &str) -> String {
    let name = match slug {
        "necklace" => "Necklaces",
        "earrings" => "Earrings",
        "rings" => "Rings",
        "bracelets" => "Bracelets",
        "anklets" => "Anklets",
        "pendants" => "Pendants",
        other => return capitalize(other),
    };
    name.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// =============================================================================
// Reference Catalog
// =============================================================================

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "p1".to_string(),
            name: "Radiant Lotus Gold Necklace".to_string(),
            description: "Exquisite 22K gold necklace inspired by the lotus flower, symbolizing \
                          purity and beauty. Each petal is delicately crafted with attention to \
                          detail."
                .to_string(),
            price: 85000.0,
            images: vec![
                "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=1287&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=1288&q=80"
                    .to_string(),
            ],
            category: "necklace".to_string(),
            material: "gold-22k".to_string(),
            weight: 14.5,
            pricing: PricingModel::Dynamic {
                making_charge: MakingCharge::PercentOfMaterial(12.0),
            },
            in_stock: true,
            featured: true,
            is_new: false,
            collection: Some("Floral Symphony".to_string()),
            purity: Some("22K".to_string()),
            dimensions: None,
        },
        Product {
            id: "p2".to_string(),
            name: "Diamond Constellation Earrings".to_string(),
            description: "Elegant constellation-inspired diamond earrings set in 18K white gold. \
                          The arrangement of diamonds resembles the stars of the night sky."
                .to_string(),
            price: 45000.0,
            images: vec![
                "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=1160&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=1319&q=80"
                    .to_string(),
            ],
            category: "earrings".to_string(),
            material: "gold-18k".to_string(),
            weight: 6.2,
            pricing: PricingModel::Dynamic {
                making_charge: MakingCharge::PercentOfMaterial(15.0),
            },
            in_stock: true,
            featured: true,
            is_new: true,
            collection: Some("Celestial Dreams".to_string()),
            purity: Some("18K".to_string()),
            dimensions: None,
        },
        Product {
            id: "p3".to_string(),
            name: "Royal Emerald Ring".to_string(),
            description: "A stunning ring featuring a central emerald surrounded by diamonds, set \
                          in 22K gold. The design is inspired by royal heritage jewelry."
                .to_string(),
            price: 65000.0,
            images: vec![
                "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=1170&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1608042314453-ae338d80c427?w=1170&q=80"
                    .to_string(),
            ],
            category: "rings".to_string(),
            material: "gold-22k".to_string(),
            weight: 8.7,
            pricing: PricingModel::Dynamic {
                making_charge: MakingCharge::PercentOfMaterial(18.0),
            },
            in_stock: true,
            featured: true,
            is_new: false,
            collection: Some("Royal Heritage".to_string()),
            purity: Some("22K".to_string()),
            dimensions: None,
        },
        Product {
            id: "p4".to_string(),
            name: "Silver Infinity Bracelet".to_string(),
            description: "A delicate silver bracelet featuring the infinity symbol, representing \
                          endless possibilities and eternal connection."
                .to_string(),
            price: 5500.0,
            images: vec![
                "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=1170&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1603561596112-0a132b757442?w=1170&q=80"
                    .to_string(),
            ],
            category: "bracelets".to_string(),
            material: "silver".to_string(),
            weight: 15.3,
            pricing: PricingModel::Dynamic {
                making_charge: MakingCharge::Flat(500.0),
            },
            in_stock: true,
            featured: false,
            is_new: true,
            collection: Some("Timeless Essentials".to_string()),
            purity: Some("925 Sterling".to_string()),
            dimensions: Some("18 cm".to_string()),
        },
        Product {
            id: "p5".to_string(),
            name: "Pearl Harmony Necklace".to_string(),
            description: "An elegant necklace featuring perfectly cultured pearls with a 18K gold \
                          clasp. A classic piece that adds sophistication to any outfit."
                .to_string(),
            price: 25000.0,
            images: vec![
                "https://images.unsplash.com/photo-1591209662757-ac2eb0abf780?w=1287&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1617038220319-276d3cfab638?w=1287&q=80"
                    .to_string(),
            ],
            category: "necklace".to_string(),
            material: "gold-18k".to_string(),
            weight: 12.0,
            pricing: PricingModel::Flat,
            in_stock: true,
            featured: true,
            is_new: false,
            collection: Some("Pearl Essence".to_string()),
            purity: None,
            dimensions: Some("45 cm".to_string()),
        },
        Product {
            id: "p6".to_string(),
            name: "Platinum Wedding Band".to_string(),
            description: "A timeless platinum wedding band with a subtle hammered texture, \
                          symbolizing the beautiful journey of marriage."
                .to_string(),
            price: 35000.0,
            images: vec![
                "https://images.unsplash.com/photo-1607703829739-c05b7beddf60?w=1170&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1517613367530-b0a79a1a7fee?w=1170&q=80"
                    .to_string(),
            ],
            category: "rings".to_string(),
            material: "platinum".to_string(),
            weight: 6.5,
            pricing: PricingModel::Dynamic {
                making_charge: MakingCharge::PercentOfMaterial(20.0),
            },
            in_stock: true,
            featured: false,
            is_new: false,
            collection: Some("Wedding Essentials".to_string()),
            purity: Some("PT950".to_string()),
            dimensions: None,
        },
        Product {
            id: "p7".to_string(),
            name: "Traditional Gold Anklet".to_string(),
            description: "Intricately designed traditional anklet crafted in 22K gold, featuring \
                          tiny bells that create a melodious sound with every step."
                .to_string(),
            price: 28000.0,
            images: vec![
                "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=1170&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1537832816519-689ad163238b?w=1159&q=80"
                    .to_string(),
            ],
            category: "anklets".to_string(),
            material: "gold-22k".to_string(),
            weight: 9.2,
            pricing: PricingModel::Dynamic {
                making_charge: MakingCharge::PercentOfMaterial(15.0),
            },
            in_stock: true,
            featured: false,
            is_new: true,
            collection: Some("Heritage Collection".to_string()),
            purity: Some("22K".to_string()),
            dimensions: None,
        },
        Product {
            id: "p8".to_string(),
            name: "Classic Diamond Pendant".to_string(),
            description: "A timeless solitaire diamond pendant set in 18K white gold, suspended \
                          on a delicate chain. Perfect for everyday elegance."
                .to_string(),
            price: 18000.0,
            images: vec![
                "https://images.unsplash.com/photo-1601821326018-d949a54b6402?w=1287&q=80"
                    .to_string(),
                "https://images.unsplash.com/photo-1575863438850-fb1c06a38884?w=1310&q=80"
                    .to_string(),
            ],
            category: "pendants".to_string(),
            material: "gold-18k".to_string(),
            weight: 3.5,
            pricing: PricingModel::Flat,
            in_stock: true,
            featured: true,
            is_new: false,
            collection: Some("Timeless Essentials".to_string()),
            purity: None,
            dimensions: None,
        },
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
