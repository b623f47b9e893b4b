//! update-xlsx: export the cleaned CSV to data/AllExtrusions.xlsx, filling
//! missing long-length price/cost from per-mm rates of the 1000mm row
//! (1500mm when no 1000mm rate exists).
//!
//! Usage:
//!   update-xlsx
//!
//! Settings (file names, lengths, ratio, column offsets) default to the
//! production catalog. A data/extrusions.json, if present, overrides any
//! of them and is reported on stdout. RUST_LOG sets log verbosity.

use anyhow::Result;
use extrusion_core::{config::CatalogConfig, passes::sync_to_workbook, sync::SyncRules};

fn main() -> Result<()> {
    env_logger::init();

    let config = CatalogConfig::load("data")?;
    if let Some(path) = &config.overrides {
        println!("Using settings from {}", path.display());
    }
    let rules = SyncRules::from(&config);
    let xlsx_path = config.xlsx_path();
    let outcome = sync_to_workbook(&config.csv_path(), &xlsx_path, &config.sheet_name, &rules)?;

    println!(
        "Wrote updated XLSX to {} ({} rows)",
        xlsx_path.display(),
        outcome.rows.len()
    );
    if !outcome.unpriced.is_empty() {
        println!("No per-mm price rate for the following SKUs:");
        for sku in &outcome.unpriced {
            println!(" - {sku}");
        }
    }
    Ok(())
}
