//! fill-3050-prices: price long-length rows from their 1000mm sibling.
//!
//! Usage:
//!   fill-3050-prices
//!
//! Rewrites data/AllExtrusions.csv only when at least one price was filled.
//!
//! Settings (file names, lengths, ratio, column offsets) default to the
//! production catalog. A data/extrusions.json, if present, overrides any
//! of them and is reported on stdout. RUST_LOG sets log verbosity.

use anyhow::Result;
use extrusion_core::{backfill::BackfillRules, config::CatalogConfig, passes::backfill_file};

fn main() -> Result<()> {
    env_logger::init();

    let config = CatalogConfig::load("data")?;
    if let Some(path) = &config.overrides {
        println!("Using settings from {}", path.display());
    }
    let rules = BackfillRules::from(&config);
    let report = backfill_file(&config.csv_path(), &rules)?;

    println!(
        "Updated {} {}mm price(s) by scaling from {}mm entries.",
        report.updated, rules.long_length, rules.short_length
    );
    if !report.unresolved.is_empty() {
        println!(
            "Could not find {}mm source price for the following SKUs:",
            rules.short_length
        );
        for sku in &report.unresolved {
            println!(" - {sku}");
        }
    }
    Ok(())
}
