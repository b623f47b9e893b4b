//! Integration tests for per-mm rate derivation and long-row filling.

use extrusion_core::{
    sync::{derive_rates, fill_long_rows, SyncRules},
    types::{Row, Table},
};

fn row(fields: &[&str]) -> Row {
    fields.iter().map(|f| f.to_string()).collect()
}

fn sync(table: Table) -> extrusion_core::sync::SyncOutcome {
    let rules = SyncRules::default();
    let rates = derive_rates(&table, &rules);
    fill_long_rows(table, &rates, &rules)
}

fn find<'a>(table: &'a Table, sku: &str) -> &'a Row {
    table.iter().find(|r| r[2] == sku).expect("row present")
}

// ─────────────────────────────────────────────────────────────────────────────
// Rate derivation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn rate_from_short_length() {
    let table = vec![row(&["1", "Rail", "R-40-1000", "", "", "120", "60"])];
    let rates = derive_rates(&table, &SyncRules::default());

    assert_eq!(rates.price_rate("R-40"), Some(0.12));
    assert_eq!(rates.cost_rate("R-40"), Some(0.06));
}

#[test]
fn short_length_wins_over_fallback() {
    let table = vec![
        row(&["1", "Rail", "R-40-1500", "", "", "300", "150"]),
        row(&["2", "Rail", "R-40-1000", "", "", "120", "60"]),
    ];
    let rates = derive_rates(&table, &SyncRules::default());

    assert_eq!(rates.price_rate("R-40"), Some(0.12));
}

#[test]
fn price_and_cost_fall_back_independently() {
    let table = vec![
        row(&["1", "Rail", "R-40-1000", "", "", "120", ""]),
        row(&["2", "Rail", "R-40-1500", "", "", "999", "30"]),
    ];
    let rates = derive_rates(&table, &SyncRules::default());

    assert_eq!(rates.price_rate("R-40"), Some(0.12));
    assert_eq!(rates.cost_rate("R-40"), Some(0.02));
}

// ─────────────────────────────────────────────────────────────────────────────
// Filling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fills_long_price_from_short_rate() {
    let outcome = sync(vec![
        row(&["1", "Rail", "R-40-1000", "", "", "120", ""]),
        row(&["2", "Rail", "R-40-3050", "", "", "", ""]),
    ]);

    assert_eq!(find(&outcome.rows, "R-40-3050")[5], "366.00");
    assert_eq!(outcome.prices_filled, 1);
    assert_eq!(outcome.costs_filled, 0);
}

#[test]
fn fills_long_price_from_fallback_rate() {
    let outcome = sync(vec![
        row(&["1", "Rail", "R-40-1500", "", "", "150", "45"]),
        row(&["2", "Rail", "R-40-3050", "", "", "", ""]),
    ]);

    let long = find(&outcome.rows, "R-40-3050");
    assert_eq!(long[5], "305.00");
    assert_eq!(long[6], "91.50");
}

#[test]
fn fills_cost_from_fallback_while_price_uses_short() {
    let outcome = sync(vec![
        row(&["1", "Rail", "R-40-1000", "", "", "120", ""]),
        row(&["2", "Rail", "R-40-1500", "", "", "999", "30"]),
        row(&["3", "Rail", "R-40-3050", "", "", "", ""]),
    ]);

    let long = find(&outcome.rows, "R-40-3050");
    assert_eq!(long[5], "366.00");
    assert_eq!(long[6], "61.00");
}

#[test]
fn existing_values_are_kept() {
    let outcome = sync(vec![
        row(&["1", "Rail", "R-40-1000", "", "", "120", "64"]),
        row(&["2", "Rail", "R-40-3050", "", "", "350", ""]),
    ]);

    let long = find(&outcome.rows, "R-40-3050");
    assert_eq!(long[5], "350");
    assert_eq!(long[6], "195.20");
    assert_eq!(outcome.prices_filled, 0);
    assert_eq!(outcome.costs_filled, 1);
}

#[test]
fn long_rows_without_rate_stay_blank_and_are_reported() {
    let outcome = sync(vec![
        row(&["1", "Rail", "R-40-500", "", "", "60", "30"]),
        row(&["2", "Rail", "R-40-3050", "", "", "", ""]),
    ]);

    let long = find(&outcome.rows, "R-40-3050");
    assert_eq!(long[5], "");
    assert_eq!(long[6], "");
    assert_eq!(outcome.unpriced, vec!["R-40-3050"]);
}

#[test]
fn rows_are_padded_and_short_rows_dropped() {
    let outcome = sync(vec![
        row(&["junk"]),
        row(&["1", "Rail", "R-40-500"]),
        row(&["a", "b"]),
        row(&["2", "Rail", "R-40-1000", "", "", "120", "60", "extra"]),
    ]);

    assert_eq!(outcome.rows.len(), 2);
    assert_eq!(outcome.rows[0], row(&["1", "Rail", "R-40-500", "", "", "", ""]));
    assert_eq!(outcome.rows[1].len(), 8);
}

#[test]
fn row_order_is_preserved() {
    let outcome = sync(vec![
        row(&["3", "Z", "Z-1-3050", "", "", "", ""]),
        row(&["1", "A", "A-1-1000", "", "", "10", "5"]),
        row(&["2", "Z", "Z-1-1000", "", "", "20", "10"]),
    ]);

    let ids: Vec<&str> = outcome.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(outcome.rows[0][5], "61.00");
    assert_eq!(outcome.rows[0][6], "30.50");
}

#[test]
fn hyphenless_skus_share_the_empty_base() {
    let outcome = sync(vec![
        row(&["1", "Bar", "1000", "", "", "120", ""]),
        row(&["2", "Bar", "3050", "", "", "", ""]),
    ]);

    let rates = derive_rates(&outcome.rows, &SyncRules::default());
    assert_eq!(rates.price_rate(""), Some(0.12));
    assert_eq!(find(&outcome.rows, "3050")[5], "366.00");
}
