pub mod export_csv;
pub mod export_xlsx;

use std::path::Path;
use thiserror::Error;

use crate::config::OutputFormat;
use crate::domain::ListingRecord;

pub use export_csv::{write_listings_csv, write_listings_to};
pub use export_xlsx::export_listings_xlsx;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("XLSX error: {0}")]
    Xlsx(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `records` to `path` in the given format, replacing any existing file.
pub fn write_listings(
    path: &Path,
    records: &[ListingRecord],
    format: OutputFormat,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        OutputFormat::Csv => write_listings_csv(path, records),
        OutputFormat::Xlsx => export_listings_xlsx(path, records),
    }
}
