//! Workbook sync pass: per-millimetre rates and long-row price/cost fill.
//!
//! Rates are keyed by base profile. The short length is the primary
//! reference; the fallback length is consulted separately for price and
//! for cost, only when the primary left that rate unset.

use crate::{
    config::CatalogConfig,
    numeric::{parse_optional_number, round_2},
    sku::Sku,
    types::{field, pad_row, ColumnLayout, Table, MIN_ROW_FIELDS},
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SyncRules {
    pub long_length:        String,
    pub short_length:       String,
    pub fallback_length:    String,
    pub columns:            ColumnLayout,
    pub min_output_columns: usize,
}

impl From<&CatalogConfig> for SyncRules {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            long_length:        config.long_length.clone(),
            short_length:       config.short_length.clone(),
            fallback_length:    config.fallback_length.clone(),
            columns:            config.columns,
            min_output_columns: config.min_output_columns,
        }
    }
}

impl Default for SyncRules {
    fn default() -> Self {
        SyncRules::from(&CatalogConfig::default())
    }
}

/// Price and cost per millimetre, by base profile key.
#[derive(Debug, Default, Clone)]
pub struct RateBook {
    pub price_per_mm: HashMap<String, f64>,
    pub cost_per_mm:  HashMap<String, f64>,
}

impl RateBook {
    pub fn price_rate(&self, base: &str) -> Option<f64> {
        self.price_per_mm.get(base).copied()
    }

    pub fn cost_rate(&self, base: &str) -> Option<f64> {
        self.cost_per_mm.get(base).copied()
    }
}

/// Collect (price, cost) per-mm rates from every row at `length`.
/// Later rows overwrite earlier ones.
fn rates_at_length(
    table: &Table,
    length: &str,
    columns: ColumnLayout,
) -> (HashMap<String, f64>, HashMap<String, f64>) {
    let mut prices = HashMap::new();
    let mut costs = HashMap::new();

    let Ok(divisor) = length.parse::<f64>() else {
        log::warn!("sync: reference length {length:?} is not numeric, no rates derived");
        return (prices, costs);
    };

    for row in table.iter().filter(|r| r.len() >= MIN_ROW_FIELDS) {
        let sku = Sku::parse(field(row, columns.sku));
        if !sku.is_length(length) {
            continue;
        }
        if let Some(price) = parse_optional_number(field(row, columns.price)) {
            prices.insert(sku.base.to_string(), price / divisor);
        }
        if let Some(cost) = parse_optional_number(field(row, columns.cost)) {
            costs.insert(sku.base.to_string(), cost / divisor);
        }
    }
    (prices, costs)
}

pub fn derive_rates(table: &Table, rules: &SyncRules) -> RateBook {
    let (mut price_per_mm, mut cost_per_mm) =
        rates_at_length(table, &rules.short_length, rules.columns);
    let (fallback_prices, fallback_costs) =
        rates_at_length(table, &rules.fallback_length, rules.columns);

    for (base, rate) in fallback_prices {
        price_per_mm.entry(base).or_insert(rate);
    }
    for (base, rate) in fallback_costs {
        cost_per_mm.entry(base).or_insert(rate);
    }

    RateBook { price_per_mm, cost_per_mm }
}

#[derive(Debug, Default)]
pub struct SyncOutcome {
    pub rows:          Table,
    pub prices_filled: usize,
    pub costs_filled:  usize,
    /// Long SKUs whose price stays missing for lack of a rate.
    pub unpriced:      Vec<String>,
}

pub fn fill_long_rows(table: Table, rates: &RateBook, rules: &SyncRules) -> SyncOutcome {
    let cols = rules.columns;
    let long_mm = rules.long_length.parse::<f64>().ok();
    let mut outcome = SyncOutcome::default();

    for mut row in table {
        if row.len() < MIN_ROW_FIELDS {
            log::debug!("sync: dropping short row {row:?}");
            continue;
        }
        pad_row(&mut row, rules.min_output_columns.max(cols.price.max(cols.cost) + 1));

        let sku = Sku::parse(&row[cols.sku]);
        let mm = match long_mm {
            Some(mm) if sku.is_length(&rules.long_length) => mm,
            _ => {
                outcome.rows.push(row);
                continue;
            }
        };
        let base = sku.base.to_string();
        let sku = row[cols.sku].trim().to_string();

        if parse_optional_number(&row[cols.price]).is_none() {
            match rates.price_rate(&base) {
                Some(rate) => {
                    row[cols.price] = round_2(rate * mm);
                    outcome.prices_filled += 1;
                }
                None => {
                    log::warn!("sync: no price rate for {sku}");
                    outcome.unpriced.push(sku.clone());
                }
            }
        }
        if parse_optional_number(&row[cols.cost]).is_none() {
            if let Some(rate) = rates.cost_rate(&base) {
                row[cols.cost] = round_2(rate * mm);
                outcome.costs_filled += 1;
            }
        }

        outcome.rows.push(row);
    }

    log::info!(
        "sync: filled {} prices and {} costs across {} rows",
        outcome.prices_filled,
        outcome.costs_filled,
        outcome.rows.len()
    );
    outcome
}
