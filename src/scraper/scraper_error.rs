use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid listing URL: {0}")]
    InvalidUrl(String),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("#poiListing container not found on {url}")]
    MissingContainer { url: String },
    #[error(
        "Field counts disagree on page {page}: \
         names={names} addresses={addresses} districts={districts} ratings={ratings} prices={prices}"
    )]
    FieldCountMismatch {
        page: u32,
        names: usize,
        addresses: usize,
        districts: usize,
        ratings: usize,
        prices: usize,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
