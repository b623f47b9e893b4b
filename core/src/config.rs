//! Catalog configuration: file locations, length vocabulary, ratios.
//!
//! Defaults describe the production catalog. A data directory may carry
//! an `extrusions.json` that overrides any subset of fields; a missing
//! file is normal, a malformed one is an error.

use crate::{
    error::{CatalogError, CatalogResult},
    types::ColumnLayout,
};
use serde::Deserialize;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "extrusions.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    #[serde(skip)]
    pub data_dir:           PathBuf,
    /// Override file applied on load, if one was found.
    #[serde(skip)]
    pub overrides:          Option<PathBuf>,
    pub csv_file:           String,
    pub tsv_file:           String,
    pub xlsx_file:          String,
    pub sheet_name:         String,
    pub allowed_lengths:    Vec<String>,
    pub long_length:        String,
    pub short_length:       String,
    pub fallback_length:    String,
    pub tap_markers:        Vec<String>,
    pub long_price_ratio:   f64,
    pub columns:            ColumnLayout,
    pub min_output_columns: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir:           PathBuf::from("data"),
            overrides:          None,
            csv_file:           "AllExtrusions.csv".into(),
            tsv_file:           "AllExtrusions.txt".into(),
            xlsx_file:          "AllExtrusions.xlsx".into(),
            sheet_name:         "AllExtrusions".into(),
            allowed_lengths:    vec!["500".into(), "1000".into(), "1500".into(), "3050".into()],
            long_length:        "3050".into(),
            short_length:       "1000".into(),
            fallback_length:    "1500".into(),
            tap_markers:        vec!["TAP1".into(), "TAP2".into()],
            long_price_ratio:   3.05,
            columns:            ColumnLayout::default(),
            min_output_columns: 7,
        }
    }
}

impl CatalogConfig {
    /// Defaults rooted at `data_dir`, overlaid by `<data_dir>/extrusions.json`.
    pub fn load(data_dir: impl Into<PathBuf>) -> CatalogResult<Self> {
        let data_dir = data_dir.into();
        let path = data_dir.join(CONFIG_FILE_NAME);

        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => {
                log::info!("loading overrides from {}", path.display());
                let mut config = serde_json::from_str::<CatalogConfig>(&content).map_err(|source| {
                    CatalogError::Config {
                        path: path.display().to_string(),
                        source,
                    }
                })?;
                config.overrides = Some(path);
                config
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CatalogConfig::default(),
            Err(e) => return Err(CatalogError::io(path.display().to_string(), e)),
        };

        config.data_dir = data_dir;
        Ok(config)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file)
    }

    pub fn tsv_path(&self) -> PathBuf {
        self.data_dir.join(&self.tsv_file)
    }

    pub fn xlsx_path(&self) -> PathBuf {
        self.data_dir.join(&self.xlsx_file)
    }
}
