// fetcher.rs
use headless_chrome::{Browser, LaunchOptions, Tab};
use reqwest::blocking::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::BrowserConfig;
use crate::scraper::ScraperError;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// One listing page to fetch.
#[derive(Debug, Clone)]
pub struct PageRequest<'a> {
    pub category: &'a str,
    pub page: u32,
    pub url: &'a str,
}

/// Produces the rendered markup for a listing page.
pub trait PageFetcher {
    fn fetch(&self, req: &PageRequest<'_>) -> Result<String, ScraperError>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for Box<T> {
    fn fetch(&self, req: &PageRequest<'_>) -> Result<String, ScraperError> {
        (**self).fetch(req)
    }
}

/// File name used when dumping and replaying page markup.
pub fn page_file_name(category: &str, page: u32) -> String {
    format!("{category}_page_{page:03}.html")
}

/// Drives a single headless Chrome tab for the whole run.
///
/// Dropping it drops the held `Browser`, which kills the Chrome process.
pub struct BrowserFetcher {
    // Held so the process lives as long as the tab
    _browser: Browser,
    tab: Arc<Tab>,
    render_delay: Duration,
    wait_for: Option<String>,
}

impl BrowserFetcher {
    pub fn launch(config: &BrowserConfig) -> Result<Self, ScraperError> {
        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .path(config.chrome_path.clone())
            .idle_browser_timeout(config.timeout())
            .build()
            .map_err(|e| ScraperError::Browser(format!("Invalid launch options: {e}")))?;

        let browser =
            Browser::new(options).map_err(|e| ScraperError::Browser(format!("Launch failed: {e}")))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScraperError::Browser(format!("Failed to open tab: {e}")))?;

        info!(headless = config.headless, "Browser launched");

        Ok(Self {
            _browser: browser,
            tab,
            render_delay: config.render_delay(),
            wait_for: config.wait_for.clone(),
        })
    }
}

impl PageFetcher for BrowserFetcher {
    fn fetch(&self, req: &PageRequest<'_>) -> Result<String, ScraperError> {
        self.tab
            .navigate_to(req.url)
            .and_then(|tab| tab.wait_until_navigated())
            .map_err(|e| ScraperError::Browser(format!("Navigation to {} failed: {e}", req.url)))?;

        if let Some(selector) = &self.wait_for {
            self.tab.wait_for_element(selector).map_err(|e| {
                ScraperError::Browser(format!("'{selector}' never appeared on {}: {e}", req.url))
            })?;
        }

        // No completion signal for the listing scripts; give them a fixed window.
        debug!(delay = ?self.render_delay, "Waiting for render");
        std::thread::sleep(self.render_delay);

        self.tab
            .get_content()
            .map_err(|e| ScraperError::Browser(format!("Failed to read page content: {e}")))
    }
}

/// Plain GET, for listings that are served pre-rendered.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, req: &PageRequest<'_>) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(req.url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::Network(format!("HTTP {status} for {}", req.url)));
        }

        Ok(text)
    }
}

/// Reads pages written earlier with `--dump-html`.
pub struct ReplayFetcher {
    dir: PathBuf,
}

impl ReplayFetcher {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl PageFetcher for ReplayFetcher {
    fn fetch(&self, req: &PageRequest<'_>) -> Result<String, ScraperError> {
        let path = self.dir.join(page_file_name(req.category, req.page));
        debug!(path = %path.display(), "Replaying page");
        Ok(std::fs::read_to_string(path)?)
    }
}
