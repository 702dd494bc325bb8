use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;
use crate::domain::Category;
use crate::scraper::{PageFetcher, PageRequest, ScraperError};

/// One restaurant block in a fixture page.
pub struct Entry {
    pub name: &'static str,
    pub district: &'static str,
    pub address: &'static str,
    pub rating: &'static str,
    pub price: &'static str,
}

pub fn entry(name: &'static str, district: &'static str, address: &'static str) -> Entry {
    Entry {
        name,
        district,
        address,
        rating: "★4.5分",
        price: "$101-200",
    }
}

fn entry_block(e: &Entry) -> String {
    format!(
        r#"<div class="sr1 clearfix">
  <div class="titleLine"><span class="title"> {name} </span></div>
  <div class="address"><a class="main_color2" href="/district">{district}</a> {address} <span class="note">near MTR</span></div>
  <div class="FL txt_bold ML5">{rating}</div>
  <div class="FL">{price}</div>
  <div class="FL PR5">Bookmarked</div>
</div>
"#,
        name = e.name,
        district = e.district,
        address = e.address,
        rating = e.rating,
        price = e.price,
    )
}

/// A full listing page; the block after the container must never be picked up.
pub fn listing_page(entries: &[Entry]) -> String {
    listing_page_with(&entries.iter().map(entry_block).collect::<String>())
}

pub fn listing_page_with(inner: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>Bookmarks</title></head>
<body>
<div class="header"><div class="titleLine">Site header</div></div>
<div id="poiListing">
{inner}</div>
<div class="footer"><a class="main_color2">Footer link</a> footer text <div class="FL">$999</div></div>
</body></html>"#
    )
}

/// Unique path under the system temp dir.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "openrice_{}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        name
    ))
}

/// Default config narrowed to one small category.
pub fn test_config(pages: u32) -> Config {
    Config {
        categories: vec![Category::new("test", 880470, pages, "openrice_test.csv")],
        ..Config::default()
    }
}

/// Serves canned markup by page number and remembers what was asked for.
#[derive(Default)]
pub struct StubFetcher {
    pub pages: HashMap<u32, String>,
    pub requested: RefCell<Vec<(String, u32)>>,
}

impl StubFetcher {
    pub fn with_pages(pages: Vec<(u32, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl PageFetcher for &StubFetcher {
    fn fetch(&self, req: &PageRequest<'_>) -> Result<String, ScraperError> {
        self.requested
            .borrow_mut()
            .push((req.category.to_string(), req.page));

        self.pages
            .get(&req.page)
            .cloned()
            .ok_or_else(|| ScraperError::Network(format!("no fixture for page {}", req.page)))
    }
}
