use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::SelectorConfig;
use crate::error::{RecordError, Result, ScrapeError};
use crate::models::Item;
use crate::scraping::extract_name_tile::extract_name_tile;
use crate::scraping::extract_price::extract_price;

/// Pairs the price tiles and name tiles of a listing page into items.
///
/// Tiles are matched by position, so the two selectors must find the same
/// number of elements. Tiles that fail to parse are logged and skipped.
pub fn extract_items(document: &Html, selectors: &SelectorConfig) -> Result<Vec<Item>> {
    let price_selector = parse_selector(&selectors.price)?;
    let name_selector = parse_selector(&selectors.name)?;

    let prices: Vec<ElementRef> = document.select(&price_selector).collect();
    let names: Vec<ElementRef> = document.select(&name_selector).collect();

    if prices.len() != names.len() {
        return Err(ScrapeError::Mismatch {
            prices: prices.len(),
            names: names.len(),
        });
    }

    let mut items = Vec::with_capacity(prices.len());
    for (index, (price_tile, name_tile)) in prices.iter().zip(names.iter()).enumerate() {
        match extract_item(price_tile, name_tile) {
            Ok(item) => {
                debug!("Extracted item {}: {}", index, item);
                items.push(item);
            }
            Err(e) => warn!("Skipping product tile {}: {}", index, e),
        }
    }

    Ok(items)
}

fn extract_item(price_tile: &ElementRef, name_tile: &ElementRef) -> std::result::Result<Item, RecordError> {
    let price = extract_price(&element_text(price_tile))?;
    let tile = extract_name_tile(&element_text(name_tile))?;

    Ok(Item {
        brand: tile.brand,
        name: tile.name,
        price,
        servings: tile.servings,
    })
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join("")
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Config {
        message: format!("invalid CSS selector {:?}: {:?}", selector, e),
    })
}
