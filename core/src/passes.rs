//! File-level drivers for each pass.
//!
//! RULES:
//!   - Each driver reads its whole input before transforming.
//!   - Nothing is written until the transform has completed.
//!   - The backfill driver writes only when at least one row changed.

use crate::{
    backfill::{backfill_long_prices, BackfillReport, BackfillRules},
    clean::{clean_table, CleanOutcome, CleanRules},
    error::CatalogResult,
    sync::{derive_rates, fill_long_rows, SyncOutcome, SyncRules},
    table::{read_table, write_table, Delimiter},
    workbook::write_workbook,
};
use std::path::Path;

/// Clean one table file in place.
pub fn clean_file(path: &Path, delimiter: Delimiter, rules: &CleanRules) -> CatalogResult<CleanOutcome> {
    let rows = read_table(path, delimiter)?;
    let outcome = clean_table(rows, rules);
    write_table(path, &outcome.rows, delimiter)?;
    Ok(outcome)
}

/// Backfill long-length prices in a comma-delimited table file.
pub fn backfill_file(path: &Path, rules: &BackfillRules) -> CatalogResult<BackfillReport> {
    let mut table = read_table(path, Delimiter::Comma)?;
    let report = backfill_long_prices(&mut table, rules);
    if report.updated > 0 {
        write_table(path, &table, Delimiter::Comma)?;
    } else {
        log::info!("backfill: nothing to update, {} left as is", path.display());
    }
    Ok(report)
}

/// Fill long rows of the comma-delimited table and export them as a workbook.
/// The source table file is not modified.
pub fn sync_to_workbook(
    csv_path: &Path,
    xlsx_path: &Path,
    sheet_name: &str,
    rules: &SyncRules,
) -> CatalogResult<SyncOutcome> {
    let table = read_table(csv_path, Delimiter::Comma)?;
    let rates = derive_rates(&table, rules);
    let outcome = fill_long_rows(table, &rates, rules);
    write_workbook(xlsx_path, sheet_name, &outcome.rows)?;
    Ok(outcome)
}
