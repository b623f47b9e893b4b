//! Catalog maintenance for extrusion profiles.
//!
//! Three independent passes over one headerless table of products:
//!   - clean:    drop deprecated and off-vocabulary lengths, add
//!               long-length placeholders, sort
//!   - backfill: price long rows from the short-length price
//!   - sync:     fill long-row price/cost from per-mm rates and
//!               export a workbook
//!
//! Passes are pure functions over `Table`. File access lives in
//! `table` and `workbook`; the drivers in `passes` glue
//! the two together for the command-line tools.

pub mod backfill;
pub mod clean;
pub mod config;
pub mod error;
pub mod numeric;
pub mod passes;
pub mod sku;
pub mod sync;
pub mod table;
pub mod types;
pub mod workbook;
