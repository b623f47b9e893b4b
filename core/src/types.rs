//! Shared primitive types used by every pass.
//!
//! RULE: A row is never indexed directly. Reads go through `field()`,
//! which treats a missing trailing field as the empty string.

use serde::Deserialize;

/// One table row: an ordered list of raw string fields.
pub type Row = Vec<String>;

/// A whole table, in file order.
pub type Table = Vec<Row>;

/// Rows with fewer fields than this carry no SKU and are never processed.
pub const MIN_ROW_FIELDS: usize = 3;

/// Fixed column offsets. Not declared in the files themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub id:          usize,
    pub description: usize,
    pub sku:         usize,
    pub price:       usize,
    pub cost:        usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            id:          0,
            description: 1,
            sku:         2,
            price:       5,
            cost:        6,
        }
    }
}

/// Read a field, yielding "" when the row is too short.
pub fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Append empty fields until the row has at least `min_len` fields.
pub fn pad_row(row: &mut Row, min_len: usize) {
    if row.len() < min_len {
        row.resize(min_len, String::new());
    }
}

/// Overwrite a field, padding the row first if it is too short.
pub fn set_field(row: &mut Row, idx: usize, value: impl Into<String>) {
    pad_row(row, idx + 1);
    row[idx] = value.into();
}
