mod assemble;
mod extract;
mod fetcher;
mod scraper;
mod scraper_error;

pub use self::assemble::assemble_rows;
pub use self::extract::{extract_fields, rating_slice};
pub use self::fetcher::{
    page_file_name, BrowserFetcher, HttpFetcher, PageFetcher, PageRequest, ReplayFetcher,
};
pub use self::scraper::{ListingScraper, PassSummary};
pub use self::scraper_error::ScraperError;
