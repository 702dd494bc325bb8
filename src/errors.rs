// errors.rs
use thiserror::Error;

use crate::config::ConfigError;
use crate::scraper::ScraperError;
use crate::spreadsheets::ExportError;

/// Errors from any stage of a scrape run: configuration, fetching/extraction, or the file write.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("category '{category}': {source}")]
    Scrape {
        category: String,
        #[source]
        source: ScraperError,
    },
    #[error("category '{category}': {source}")]
    Export {
        category: String,
        #[source]
        source: ExportError,
    },
}
