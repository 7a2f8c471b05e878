//! # Storefront Walkthrough
//!
//! Exercises the catalog, pricing, and cart flows end to end against a local
//! storage directory.
//!
//! ## Usage
//! ```bash
//! # Default storage directory (./aurelia_data)
//! cargo run -p aurelia-store --bin demo
//!
//! # Custom storage directory
//! cargo run -p aurelia-store --bin demo -- --data ./tmp/store
//! ```
//!
//! ## What It Shows
//! - The seeded catalog and current material rates
//! - An itemized price breakdown for a dynamically priced product
//! - A cart session: add, change quantity, totals, persistence
//! - Cart restore across a simulated restart

use std::env;

use tracing_subscriber::EnvFilter;

use aurelia_core::cart::CartItem;
use aurelia_core::currency::format_inr;
use aurelia_core::materials::RateTable;
use aurelia_core::pricing::{explain_price, BreakdownLine};
use aurelia_core::types::PricingModel;
use aurelia_store::{CartSession, CartStore, InMemoryProductRepository, ProductRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut data_dir = String::from("./aurelia_data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Aurelia Jewels Storefront Walkthrough");
                println!();
                println!("Usage: demo [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data <DIR>   Storage directory (default: ./aurelia_data)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("💎 Aurelia Jewels Storefront Walkthrough");
    println!("========================================");
    println!("Storage: {}", data_dir);
    println!();

    // Catalog and rates
    let catalog = InMemoryProductRepository::seeded();
    let rates = RateTable::reference();

    println!("Material rates:");
    for material in rates.materials() {
        println!("  {:<12} {}/unit", material.slug, format_inr(material.rate));
    }
    println!();

    println!("Catalog ({} products):", catalog.list().len());
    for product in catalog.list() {
        let tag = match product.pricing {
            PricingModel::Flat => "flat",
            PricingModel::Dynamic { .. } => "dynamic",
        };
        println!(
            "  {:<4} {:<32} {:>14}  [{}]",
            product.id,
            product.name,
            format_inr(product.price),
            tag
        );
    }
    println!();

    // Price breakdown for a dynamically priced product
    let necklace = catalog
        .get("p1")
        .ok_or("reference catalog is missing product p1")?;
    println!("Price breakdown — {}:", necklace.name);
    let breakdown = explain_price(&necklace, &rates);
    for line in &breakdown.lines {
        match line {
            BreakdownLine::FixedPrice { amount } => {
                println!("  Fixed Price          {:>14}", format_inr(*amount));
            }
            BreakdownLine::MaterialCost {
                material,
                rate_per_unit,
                weight,
                amount,
            } => {
                println!(
                    "  Material Cost        {:>14}   ({} × {} @ {}/unit)",
                    format_inr(*amount),
                    material,
                    weight,
                    format_inr(*rate_per_unit)
                );
            }
            BreakdownLine::MakingChargeLine { percent, amount } => match percent {
                Some(pct) => println!(
                    "  Making Charge ({}%)  {:>14}",
                    pct,
                    format_inr(*amount)
                ),
                None => println!("  Making Charge        {:>14}", format_inr(*amount)),
            },
        }
    }
    println!("  Total                {:>14}", format_inr(breakdown.total));
    println!();

    // Cart session
    let store = CartStore::open(&data_dir)?;
    let mut session = CartSession::open(store);
    session.clear()?;

    println!("Cart session:");
    for id in ["p1", "p4"] {
        let product = catalog.get(id).ok_or("reference catalog changed")?;
        let event = session.add(cart_item(&product))?;
        println!("  + {:?}", event);
    }

    if let Some(event) = session.set_quantity("p4", 2)? {
        println!("  ~ {:?}", event);
    }

    let totals = session.totals();
    println!();
    println!("✓ Cart total: {} ({} items)", format_inr(totals.total), totals.item_count);

    // Simulated restart: drop the session and restore from disk.
    drop(session);
    let restored = CartSession::open(CartStore::open(&data_dir)?);
    println!(
        "✓ Restored after restart: {} ({} items)",
        format_inr(restored.cart().total()),
        restored.cart().item_count()
    );

    Ok(())
}

/// Builds a cart line item from a catalog product.
fn cart_item(product: &aurelia_core::types::Product) -> CartItem {
    let making_charge = match &product.pricing {
        PricingModel::Flat => None,
        PricingModel::Dynamic { making_charge } => Some(making_charge.raw_value()),
    };

    CartItem {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        image: product.thumbnail().unwrap_or_default().to_string(),
        quantity: 1,
        weight: Some(product.weight),
        material: Some(product.material.clone()),
        making_charge,
    }
}
