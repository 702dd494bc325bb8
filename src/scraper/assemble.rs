// assemble.rs
use tracing::warn;

use crate::config::Alignment;
use crate::domain::{FieldLists, ListingRecord};
use crate::scraper::ScraperError;

/// Combine one page's field lists into records keyed by their position on the page.
pub fn assemble_rows(
    fields: FieldLists,
    page: u32,
    alignment: Alignment,
) -> Result<Vec<ListingRecord>, ScraperError> {
    let [names, addresses, districts, ratings, prices] = fields.counts();

    if !fields.is_aligned() {
        match alignment {
            Alignment::Strict => {
                return Err(ScraperError::FieldCountMismatch {
                    page,
                    names,
                    addresses,
                    districts,
                    ratings,
                    prices,
                });
            }
            Alignment::Truncate => {
                warn!(
                    page,
                    names, addresses, districts, ratings, prices,
                    "Field counts disagree, truncating to the shortest list"
                );
            }
        }
    }

    let FieldLists {
        names,
        addresses,
        districts,
        ratings,
        prices,
    } = fields;

    let rows = names
        .into_iter()
        .zip(addresses)
        .zip(districts)
        .zip(ratings)
        .zip(prices)
        .enumerate()
        .map(
            |(position, ((((name, address), district), rating), price))| ListingRecord {
                page,
                position,
                name,
                address,
                district,
                rating,
                price,
            },
        )
        .collect();

    Ok(rows)
}
