//! Delimited table persistence.
//!
//! RULE: Only table.rs reads or writes table files.
//! Passes operate on in-memory `Table`s and never touch the filesystem.
//!
//! Files are headerless with ragged rows. The comma file uses minimal
//! quoting; the tab file is written and read verbatim with no quoting.

use crate::{
    error::{CatalogError, CatalogResult},
    types::Table,
};
use csv::{QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab   => b'\t',
        }
    }

    /// Short name used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => "CSV",
            Delimiter::Tab   => "TXT",
        }
    }

    fn quoted(self) -> bool {
        matches!(self, Delimiter::Comma)
    }
}

/// Parse a whole table from any reader. Empty lines are skipped; every
/// other record, including one made only of empty fields, is kept.
pub fn parse_table<R: std::io::Read>(input: R, delimiter: Delimiter) -> CatalogResult<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::None)
        .quoting(delimiter.quoted())
        .delimiter(delimiter.byte())
        .from_reader(input);

    let mut table = Table::new();
    for record in reader.records() {
        let record = record?;
        table.push(record.iter().map(str::to_string).collect());
    }
    Ok(table)
}

pub fn read_table(path: &Path, delimiter: Delimiter) -> CatalogResult<Table> {
    let file = std::fs::File::open(path)
        .map_err(|e| CatalogError::io(path.display().to_string(), e))?;
    let table = parse_table(file, delimiter)?;
    log::debug!("read {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Serialize a table to bytes, one `\n`-terminated record per row.
pub fn render_table(table: &Table, delimiter: Delimiter) -> CatalogResult<Vec<u8>> {
    let quote_style = if delimiter.quoted() {
        QuoteStyle::Necessary
    } else {
        QuoteStyle::Never
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter.byte())
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in table {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| CatalogError::Other(anyhow::anyhow!("flushing table buffer: {}", e.error())))
}

/// Overwrite `path` with the rendered table.
/// Rendering completes in memory before the file is opened.
pub fn write_table(path: &Path, table: &Table, delimiter: Delimiter) -> CatalogResult<()> {
    let bytes = render_table(table, delimiter)?;
    std::fs::write(path, bytes).map_err(|e| CatalogError::io(path.display().to_string(), e))?;
    log::debug!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
