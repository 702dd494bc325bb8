use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{Alignment, Config, FetcherKind, OutputFormat};
use crate::errors::AppError;

mod config;
mod domain;
mod errors;
mod runner;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "openrice_scraper",
    about = "Scrape bookmarked OpenRice restaurant listings into CSV",
    version
)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Category to scrape (repeatable; default: all configured)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Print the configured categories and exit
    #[arg(long)]
    list_categories: bool,

    #[arg(long)]
    start_page: Option<u32>,

    /// Stop each category after this page
    #[arg(long)]
    max_pages: Option<u32>,

    #[arg(long, value_enum)]
    fetcher: Option<FetcherKind>,

    /// Directory of dumped pages for the replay fetcher
    #[arg(long)]
    replay_dir: Option<PathBuf>,

    /// Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<PathBuf>,

    /// Show the browser window
    #[arg(long)]
    headful: bool,

    /// Seconds to wait after each page load
    #[arg(long)]
    render_delay_secs: Option<u64>,

    /// CSS selector to wait for before the render delay
    #[arg(long)]
    wait_for: Option<String>,

    /// Save every fetched page's markup here
    #[arg(long)]
    dump_html: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Zip mismatched field lists to the shortest instead of failing
    #[arg(long)]
    lenient: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Flags win over the config file and environment.
    fn apply(&self, config: &mut Config) {
        if let Some(page) = self.start_page {
            config.start_page = page;
        }
        if self.max_pages.is_some() {
            config.max_pages = self.max_pages;
        }
        if let Some(fetcher) = self.fetcher {
            config.fetcher = fetcher;
        }
        if self.replay_dir.is_some() {
            config.replay_dir = self.replay_dir.clone();
        }
        if self.chrome_path.is_some() {
            config.browser.chrome_path = self.chrome_path.clone();
        }
        if self.headful {
            config.browser.headless = false;
        }
        if let Some(delay) = self.render_delay_secs {
            config.browser.render_delay_secs = delay;
        }
        if self.wait_for.is_some() {
            config.browser.wait_for = self.wait_for.clone();
        }
        if self.dump_html.is_some() {
            config.dump_html = self.dump_html.clone();
        }
        if self.output_dir.is_some() {
            config.output_dir = self.output_dir.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.lenient {
            config.alignment = Alignment::Truncate;
        }
    }
}

/// Defaults, then the config file, then the environment, then flags.
fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env()?;
    cli.apply(&mut config);
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config = load_config(&cli)?;

    if cli.list_categories {
        for c in &config.categories {
            println!(
                "{}\tbpcatId={}\tpages={}\t{}",
                c.name,
                c.bpcat_id,
                c.pages,
                config.output_path(c).display()
            );
        }
        return Ok(());
    }

    let categories = config.select_categories(&cli.categories)?;
    let fetcher = runner::build_fetcher(&config).context("Failed to set up page fetcher")?;

    let written = runner::run_categories(fetcher, &config, &categories)?;
    for pass in &written {
        println!(
            "{}: {} rows from {} pages -> {}",
            pass.category,
            pass.rows,
            pass.pages,
            pass.path.display()
        );
    }

    Ok(())
}
