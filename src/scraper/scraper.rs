// scraper.rs
use std::path::PathBuf;
use tracing::{debug, info, info_span};

use crate::config::{Alignment, Config};
use crate::domain::{Category, ListingRecord};
use crate::scraper::{
    assemble_rows, extract_fields, page_file_name, PageFetcher, PageRequest, ScraperError,
};

/// What one category pass produced.
#[derive(Debug)]
pub struct PassSummary {
    pub category: String,
    pub pages_fetched: usize,
    pub empty_pages: usize,
    pub records: Vec<ListingRecord>,
}

pub struct ListingScraper<'c, F: PageFetcher> {
    fetcher: F,
    config: &'c Config,
}

impl<'c, F: PageFetcher> ListingScraper<'c, F> {
    pub fn new(fetcher: F, config: &'c Config) -> Self {
        Self { fetcher, config }
    }

    /// Fetch, extract and assemble a single page.
    pub fn scrape_page(
        &self,
        category: &Category,
        page: u32,
    ) -> Result<Vec<ListingRecord>, ScraperError> {
        let url = self
            .config
            .listing_url(category, page)
            .map_err(|e| ScraperError::InvalidUrl(e.to_string()))?;

        let req = PageRequest {
            category: &category.name,
            page,
            url: url.as_str(),
        };

        let html = self.fetcher.fetch(&req)?;
        self.dump_html(&category.name, page, &html)?;

        let fields = extract_fields(&html, url.as_str())?;
        debug!(counts = ?fields.counts(), "Fields extracted");

        assemble_rows(fields, page, self.alignment())
    }

    /// Walk every configured page of `category` in order, handing each page's rows to `on_page`.
    pub fn fetch_all_pages<G>(&self, category: &Category, mut on_page: G) -> Result<(), ScraperError>
    where
        G: FnMut(u32, Vec<ListingRecord>) -> Result<(), ScraperError>,
    {
        for page in self.config.page_range(category) {
            let _span = info_span!("page", category = %category.name, page).entered();

            let rows = self.scrape_page(category, page)?;
            info!(rows = rows.len(), "Page parsed");

            on_page(page, rows)?;
        }

        Ok(())
    }

    /// Scrape a whole category, accumulating rows in page order.
    pub fn run_category(&self, category: &Category) -> Result<PassSummary, ScraperError> {
        let range = self.config.page_range(category);
        info!(
            category = %category.name,
            first = range.start(),
            last = range.end(),
            "Starting category pass"
        );

        let mut summary = PassSummary {
            category: category.name.clone(),
            pages_fetched: 0,
            empty_pages: 0,
            records: Vec::new(),
        };

        self.fetch_all_pages(category, |_page, rows| {
            summary.pages_fetched += 1;
            if rows.is_empty() {
                summary.empty_pages += 1;
            }
            summary.records.extend(rows);
            Ok(())
        })?;

        info!(
            category = %category.name,
            pages = summary.pages_fetched,
            empty_pages = summary.empty_pages,
            rows = summary.records.len(),
            "Category pass complete"
        );

        Ok(summary)
    }

    fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    fn dump_html(&self, category: &str, page: u32, html: &str) -> Result<(), ScraperError> {
        let Some(dir) = &self.config.dump_html else {
            return Ok(());
        };

        std::fs::create_dir_all(dir)?;
        let path: PathBuf = dir.join(page_file_name(category, page));
        std::fs::write(&path, html)?;
        debug!(path = %path.display(), "Page markup saved");
        Ok(())
    }
}
