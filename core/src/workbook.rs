//! XLSX output for the synced catalog.
//!
//! RULE: One sheet, raw string cells, no styling, no formulas.
//! Empty fields are left as blank cells.

use crate::{
    error::{CatalogError, CatalogResult},
    types::Table,
};
use rust_xlsxwriter::Workbook;
use std::path::Path;

fn build_workbook(table: &Table, sheet_name: &str) -> CatalogResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (r, row) in table.iter().enumerate() {
        let r = u32::try_from(r)
            .map_err(|_| CatalogError::Other(anyhow::anyhow!("row {r} exceeds sheet limits")))?;
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let c = u16::try_from(c).map_err(|_| {
                CatalogError::Other(anyhow::anyhow!("column {c} exceeds sheet limits"))
            })?;
            worksheet.write_string(r, c, value.as_str())?;
        }
    }
    Ok(workbook)
}

/// Render the workbook in memory.
pub fn workbook_bytes(table: &Table, sheet_name: &str) -> CatalogResult<Vec<u8>> {
    let mut workbook = build_workbook(table, sheet_name)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write a fresh workbook at `path`, replacing any existing file.
pub fn write_workbook(path: &Path, sheet_name: &str, table: &Table) -> CatalogResult<()> {
    let mut workbook = build_workbook(table, sheet_name)?;
    workbook.save(path)?;
    log::debug!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
