//! clean-extrusions: keep only the allowed lengths, drop tap variants and
//! make sure every profile has a long-length row.
//!
//! Usage:
//!   clean-extrusions
//!
//! Cleans data/AllExtrusions.csv and data/AllExtrusions.txt in place,
//! each independently, then reports any SKU drift between the two.
//!
//! Settings (file names, lengths, ratio, column offsets) default to the
//! production catalog. A data/extrusions.json, if present, overrides any
//! of them and is reported on stdout. RUST_LOG sets log verbosity.

use anyhow::Result;
use extrusion_core::{
    clean::{sibling_drift, CleanRules},
    config::CatalogConfig,
    passes::clean_file,
    table::Delimiter,
};

fn main() -> Result<()> {
    env_logger::init();

    let config = CatalogConfig::load("data")?;
    if let Some(path) = &config.overrides {
        println!("Using settings from {}", path.display());
    }
    let rules = CleanRules::from(&config);

    let mut cleaned = Vec::new();
    for (path, delimiter) in [
        (config.csv_path(), Delimiter::Comma),
        (config.tsv_path(), Delimiter::Tab),
    ] {
        let outcome = clean_file(&path, delimiter, &rules)?;
        println!(
            "Wrote cleaned {} to {} ({} rows)",
            delimiter.label(),
            path.display(),
            outcome.rows.len()
        );
        cleaned.push(outcome.rows);
    }

    let drift = sibling_drift(&cleaned[0], &cleaned[1], config.columns);
    if !drift.is_empty() {
        log::warn!(
            "{} and {} disagree: {} SKU(s) only in the first, {} only in the second",
            config.csv_file,
            config.tsv_file,
            drift.only_in_first.len(),
            drift.only_in_second.len()
        );
        for sku in &drift.only_in_first {
            log::warn!("  only in {}: {sku}", config.csv_file);
        }
        for sku in &drift.only_in_second {
            log::warn!("  only in {}: {sku}", config.tsv_file);
        }
    }

    println!("Done");
    Ok(())
}
