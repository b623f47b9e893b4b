//! Clean pass: length filtering and long-length placeholders.
//!
//! Order of checks per row is fixed: short rows, then tap markers, then
//! the allowed length vocabulary. Only rows surviving all three count
//! towards a base's first row and its long-length coverage.

use crate::{
    config::CatalogConfig,
    sku::{has_tap_marker, Sku},
    types::{field, pad_row, ColumnLayout, Table, MIN_ROW_FIELDS},
};
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct CleanRules {
    pub allowed_lengths:    Vec<String>,
    pub long_length:        String,
    pub tap_markers:        Vec<String>,
    pub columns:            ColumnLayout,
    pub min_output_columns: usize,
}

impl From<&CatalogConfig> for CleanRules {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            allowed_lengths:    config.allowed_lengths.clone(),
            long_length:        config.long_length.clone(),
            tap_markers:        config.tap_markers.clone(),
            columns:            config.columns,
            min_output_columns: config.min_output_columns,
        }
    }
}

impl Default for CleanRules {
    fn default() -> Self {
        CleanRules::from(&CatalogConfig::default())
    }
}

#[derive(Debug, Default)]
pub struct CleanOutcome {
    pub rows:           Table,
    pub dropped_short:  usize,
    pub dropped_tap:    usize,
    pub dropped_length: usize,
    /// SKUs of placeholder rows added for bases lacking a long-length row.
    pub synthesized:    Vec<String>,
}

impl CleanOutcome {
    pub fn dropped(&self) -> usize {
        self.dropped_short + self.dropped_tap + self.dropped_length
    }
}

pub fn clean_table(rows: Table, rules: &CleanRules) -> CleanOutcome {
    let cols = rules.columns;
    let mut outcome = CleanOutcome::default();

    let mut kept = Table::new();
    let mut base_order: Vec<String> = Vec::new();
    let mut first_row: HashMap<String, usize> = HashMap::new();
    let mut has_long: HashSet<String> = HashSet::new();

    for row in rows {
        if row.len() < MIN_ROW_FIELDS {
            log::debug!("clean: dropping short row {row:?}");
            outcome.dropped_short += 1;
            continue;
        }

        let raw_sku = field(&row, cols.sku);
        if has_tap_marker(raw_sku, &rules.tap_markers) {
            log::debug!("clean: dropping tap variant {}", raw_sku.trim());
            outcome.dropped_tap += 1;
            continue;
        }

        let sku = Sku::parse(raw_sku);
        if !rules.allowed_lengths.iter().any(|l| l == sku.length) {
            log::debug!("clean: dropping disallowed length {}", raw_sku.trim());
            outcome.dropped_length += 1;
            continue;
        }

        let base = sku.base.to_string();
        if sku.is_length(&rules.long_length) {
            has_long.insert(base.clone());
        }
        if !first_row.contains_key(&base) {
            first_row.insert(base.clone(), kept.len());
            base_order.push(base);
        }
        kept.push(row);
    }

    for base in &base_order {
        if has_long.contains(base) {
            continue;
        }
        let mut row = kept[first_row[base]].clone();
        pad_row(&mut row, rules.min_output_columns.max(cols.sku + 1));

        let sku = format!("{base}-{}", rules.long_length);
        row[cols.sku] = sku.clone();
        for value in row
            .iter_mut()
            .take(rules.min_output_columns)
            .skip(cols.sku + 1)
        {
            value.clear();
        }

        log::debug!("clean: adding placeholder {sku}");
        outcome.synthesized.push(sku);
        kept.push(row);
    }

    kept.sort_by(|a, b| {
        (field(a, cols.description), field(a, cols.sku))
            .cmp(&(field(b, cols.description), field(b, cols.sku)))
    });

    log::info!(
        "clean: kept {} rows, dropped {} (short={}, tap={}, length={}), added {} placeholders",
        kept.len() - outcome.synthesized.len(),
        outcome.dropped(),
        outcome.dropped_short,
        outcome.dropped_tap,
        outcome.dropped_length,
        outcome.synthesized.len(),
    );

    outcome.rows = kept;
    outcome
}

/// SKUs present in only one of two tables meant to hold the same catalog.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SiblingDrift {
    pub only_in_first:  Vec<String>,
    pub only_in_second: Vec<String>,
}

impl SiblingDrift {
    pub fn is_empty(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

pub fn sibling_drift(first: &Table, second: &Table, columns: ColumnLayout) -> SiblingDrift {
    let skus = |table: &Table| -> BTreeSet<String> {
        table
            .iter()
            .map(|row| field(row, columns.sku).trim().to_string())
            .collect()
    };
    let a = skus(first);
    let b = skus(second);

    SiblingDrift {
        only_in_first:  a.difference(&b).cloned().collect(),
        only_in_second: b.difference(&a).cloned().collect(),
    }
}
