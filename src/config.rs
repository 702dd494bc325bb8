// config.rs
use clap::ValueEnum;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::domain::Category;

const DEFAULT_BASE_URL: &str = "https://www.openrice.com/zh/gourmet/bookmarkrestaurant.htm";
const DEFAULT_USER_ID: &str = "66275053";
const DEFAULT_CITY: &str = "hongkong";

pub const ENV_CHROME_PATH: &str = "OPENRICE_CHROME_PATH";
pub const ENV_RENDER_DELAY: &str = "OPENRICE_RENDER_DELAY_SECS";
pub const ENV_OUTPUT_DIR: &str = "OPENRICE_OUTPUT_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetcherKind {
    /// Headless Chrome, waits for client-side rendering
    #[default]
    Browser,
    /// Plain HTTP GET, no rendering
    Http,
    /// Previously dumped pages from disk
    Replay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Xlsx,
}

/// How the five per-field lists of a page are combined into rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Any disagreement between field counts is an error
    #[default]
    Strict,
    /// Zip to the shortest list and log a warning
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Chrome/Chromium binary; auto-detected if omitted.
    pub chrome_path: Option<PathBuf>,
    pub headless: bool,
    /// Fixed sleep after each navigation so client-side rendering can settle.
    pub render_delay_secs: u64,
    /// Optional CSS selector to wait for before the render delay starts.
    pub wait_for: Option<String>,
    /// Idle timeout for the browser process.
    pub timeout_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            headless: true,
            render_delay_secs: 10,
            wait_for: None,
            timeout_secs: 120,
        }
    }
}

impl BrowserConfig {
    pub fn render_delay(&self) -> Duration {
        Duration::from_secs(self.render_delay_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub user_id: String,
    pub city: String,
    pub categories: Vec<Category>,

    pub start_page: u32,
    /// Caps every category's last page when set.
    pub max_pages: Option<u32>,

    pub fetcher: FetcherKind,
    pub browser: BrowserConfig,
    /// Request timeout for the HTTP fetcher.
    pub http_timeout_secs: u64,
    pub replay_dir: Option<PathBuf>,
    pub dump_html: Option<PathBuf>,

    pub output_dir: Option<PathBuf>,
    pub format: OutputFormat,
    pub alignment: Alignment,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            city: DEFAULT_CITY.to_string(),
            categories: Category::builtin(),
            start_page: 1,
            max_pages: None,
            fetcher: FetcherKind::default(),
            browser: BrowserConfig::default(),
            http_timeout_secs: 60,
            replay_dir: None,
            dump_html: None,
            output_dir: None,
            format: OutputFormat::default(),
            alignment: Alignment::default(),
        }
    }
}

impl Config {
    /// Defaults, overlaid by the JSON file at `path` if one is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Environment overrides, read through `lookup` so callers can supply their own source.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CHROME_PATH).filter(|v| !v.is_empty()) {
            self.browser.chrome_path = Some(PathBuf::from(path));
        }

        if let Some(delay) = lookup(ENV_RENDER_DELAY) {
            self.browser.render_delay_secs = delay.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_RENDER_DELAY} must be whole seconds, got '{delay}'"))
            })?;
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
            self.output_dir = Some(PathBuf::from(dir));
        }

        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_page == 0 {
            return Err(ConfigError::Invalid("start_page is 1-based".into()));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::Invalid("no categories configured".into()));
        }
        if self.fetcher == FetcherKind::Replay && self.replay_dir.is_none() {
            return Err(ConfigError::Invalid(
                "the replay fetcher needs a replay directory".into(),
            ));
        }
        Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url '{}': {e}", self.base_url)))?;
        Ok(())
    }

    /// The configured categories matching `names`, in the order given; all of them if `names` is empty.
    pub fn select_categories(&self, names: &[String]) -> Result<Vec<Category>, ConfigError> {
        if names.is_empty() {
            return Ok(self.categories.clone());
        }

        names
            .iter()
            .map(|name| {
                self.categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(name))
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownCategory(name.clone()))
            })
            .collect()
    }

    pub fn page_range(&self, category: &Category) -> RangeInclusive<u32> {
        let last = match self.max_pages {
            Some(cap) => category.pages.min(cap),
            None => category.pages,
        };
        self.start_page..=last
    }

    pub fn listing_url(&self, category: &Category, page: u32) -> Result<Url, ConfigError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url '{}': {e}", self.base_url)))?;

        url.query_pairs_mut()
            .append_pair("userid", &self.user_id)
            .append_pair("city", &self.city)
            .append_pair("bpcatId", &category.bpcat_id.to_string())
            .append_pair("page", &page.to_string());

        Ok(url)
    }

    pub fn output_path(&self, category: &Category) -> PathBuf {
        let mut path = match &self.output_dir {
            Some(dir) => dir.join(&category.output),
            None => category.output.clone(),
        };

        if self.format == OutputFormat::Xlsx {
            path.set_extension("xlsx");
        }

        path
    }
}
