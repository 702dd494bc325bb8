// extract.rs
use scraper::{ElementRef, Html, Selector};

use crate::domain::FieldLists;
use crate::scraper::ScraperError;

const CONTAINER: &str = "div#poiListing";
// `titleLine` alone is not enough: `title` is reused elsewhere on the page
const NAME: &str = "div.titleLine";
const DISTRICT_LINK: &str = "a.main_color2";
// Exact attribute matches: other blocks carry these classes alongside more, or reordered
const RATING: &str = r#"div[class="FL txt_bold ML5"]"#;
const PRICE: &str = r#"div[class="FL"]"#;

fn selector(css: &str) -> Result<Selector, ScraperError> {
    Selector::parse(css).map_err(|e| ScraperError::HtmlParse(format!("{css}: {e}")))
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// First text node among the anchor's following siblings.
///
/// Element siblings are skipped, never descended into.
fn next_sibling_text(el: ElementRef<'_>) -> String {
    el.next_siblings()
        .find_map(|node| node.value().as_text().map(|t| t.trim().to_string()))
        .unwrap_or_default()
}

/// Characters 2 through 5 of the rating cell, trimmed.
///
/// The cell starts with a single glyph before the score; no numeric parsing happens here.
pub fn rating_slice(text: &str) -> String {
    text.chars()
        .skip(1)
        .take(4)
        .collect::<String>()
        .trim()
        .to_string()
}

/// Pull the five field lists out of one listing page, in document order.
pub fn extract_fields(html: &str, url: &str) -> Result<FieldLists, ScraperError> {
    let document = Html::parse_document(html);

    let container = document
        .select(&selector(CONTAINER)?)
        .next()
        .ok_or_else(|| ScraperError::MissingContainer {
            url: url.to_string(),
        })?;

    let names = container.select(&selector(NAME)?).map(trimmed_text).collect();

    let links: Vec<ElementRef<'_>> = container.select(&selector(DISTRICT_LINK)?).collect();
    let addresses = links.iter().copied().map(next_sibling_text).collect();
    let districts = links.iter().copied().map(trimmed_text).collect();

    let ratings = container
        .select(&selector(RATING)?)
        .map(|el| rating_slice(&el.text().collect::<String>()))
        .collect();

    let prices = container.select(&selector(PRICE)?).map(trimmed_text).collect();

    Ok(FieldLists {
        names,
        addresses,
        districts,
        ratings,
        prices,
    })
}
