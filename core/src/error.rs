use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot access {path}: {source}")]
    Io {
        path:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Invalid config {path}: {source}")]
    Config {
        path:   String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CatalogError::Io { path: path.into(), source }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
