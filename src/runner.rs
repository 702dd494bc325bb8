// runner.rs
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::{Config, FetcherKind};
use crate::domain::Category;
use crate::errors::AppError;
use crate::scraper::{
    BrowserFetcher, HttpFetcher, ListingScraper, PageFetcher, ReplayFetcher, ScraperError,
};
use crate::spreadsheets::write_listings;

/// Result of one category pass that made it to disk.
#[derive(Debug)]
pub struct WrittenPass {
    pub category: String,
    pub path: PathBuf,
    pub rows: usize,
    pub pages: usize,
}

pub fn build_fetcher(config: &Config) -> Result<Box<dyn PageFetcher>, ScraperError> {
    let fetcher: Box<dyn PageFetcher> = match config.fetcher {
        FetcherKind::Browser => Box::new(BrowserFetcher::launch(&config.browser)?),
        FetcherKind::Http => Box::new(HttpFetcher::new(config.http_timeout())?),
        FetcherKind::Replay => {
            let dir = config.replay_dir.as_ref().ok_or_else(|| {
                ScraperError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no replay directory configured",
                ))
            })?;
            Box::new(ReplayFetcher::new(dir))
        }
    };
    Ok(fetcher)
}

/// Scrape each category in turn and write its file once the pass is complete.
///
/// The first failing page aborts the run; files of earlier categories stay written.
pub fn run_categories<F: PageFetcher>(
    fetcher: F,
    config: &Config,
    categories: &[Category],
) -> Result<Vec<WrittenPass>, AppError> {
    let scraper = ListingScraper::new(fetcher, config);
    let mut written = Vec::with_capacity(categories.len());

    for category in categories {
        let summary = scraper.run_category(category).map_err(|source| {
            error!(category = %category.name, error = %source, "Category pass failed");
            AppError::Scrape {
                category: category.name.clone(),
                source,
            }
        })?;

        let path = config.output_path(category);
        write_listings(&path, &summary.records, config.format).map_err(|source| {
            AppError::Export {
                category: category.name.clone(),
                source,
            }
        })?;

        info!(
            category = %category.name,
            path = %path.display(),
            rows = summary.records.len(),
            "Wrote listings"
        );

        written.push(WrittenPass {
            category: summary.category,
            path,
            rows: summary.records.len(),
            pages: summary.pages_fetched,
        });
    }

    Ok(written)
}
