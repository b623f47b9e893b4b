//! Backfill pass: long-length prices scaled from the short-length price.
//!
//! A long row is only touched when its price is missing. The source is
//! the row whose SKU is the same base with the short-length suffix; when
//! several such rows carry a price, the last one in the table wins.

use crate::{
    config::CatalogConfig,
    numeric::{parse_optional_number, round_half_up_2},
    types::{field, set_field, ColumnLayout, Table, MIN_ROW_FIELDS},
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct BackfillRules {
    pub long_length:  String,
    pub short_length: String,
    /// Long price = short price * ratio.
    pub ratio:        f64,
    pub columns:      ColumnLayout,
}

impl From<&CatalogConfig> for BackfillRules {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            long_length:  config.long_length.clone(),
            short_length: config.short_length.clone(),
            ratio:        config.long_price_ratio,
            columns:      config.columns,
        }
    }
}

impl Default for BackfillRules {
    fn default() -> Self {
        BackfillRules::from(&CatalogConfig::default())
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct BackfillReport {
    pub updated:    usize,
    /// Long SKUs with a missing price and no priced short sibling.
    pub unresolved: Vec<String>,
}

pub fn backfill_long_prices(table: &mut Table, rules: &BackfillRules) -> BackfillReport {
    let cols = rules.columns;
    let long_suffix = format!("-{}", rules.long_length);
    let short_suffix = format!("-{}", rules.short_length);

    let mut short_prices: HashMap<String, f64> = HashMap::new();
    for row in table.iter().filter(|r| r.len() >= MIN_ROW_FIELDS) {
        let sku = field(row, cols.sku).trim();
        if !sku.ends_with(&short_suffix) {
            continue;
        }
        if let Some(price) = parse_optional_number(field(row, cols.price)) {
            short_prices.insert(sku.to_string(), price);
        }
    }

    let mut report = BackfillReport::default();
    for row in table.iter_mut().filter(|r| r.len() >= MIN_ROW_FIELDS) {
        let sku = field(row, cols.sku).trim().to_string();
        let Some(base) = sku.strip_suffix(&long_suffix) else {
            continue;
        };
        if parse_optional_number(field(row, cols.price)).is_some() {
            continue;
        }

        let source = format!("{base}{short_suffix}");
        match short_prices.get(&source) {
            Some(&short_price) => {
                let price = round_half_up_2(short_price * rules.ratio);
                log::debug!("backfill: {sku} <- {source} ({short_price} * {})", rules.ratio);
                set_field(row, cols.price, price);
                report.updated += 1;
            }
            None => {
                log::warn!("backfill: no priced {source} for {sku}");
                report.unresolved.push(sku);
            }
        }
    }

    log::info!(
        "backfill: updated {} long prices, {} unresolved",
        report.updated,
        report.unresolved.len()
    );
    report
}
