use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::models::{Category, SortKey};
use crate::scraping::extract_items;
use crate::utilities::build_listing_url::build_listing_url;
use crate::utilities::fetch_listing::{build_client, fetch_listing};
use crate::utilities::sort_items::sort_items;
use crate::utilities::write_csv::write_csv_file;

/// Summary of a finished run.
#[derive(Debug)]
pub struct ScrapeReport {
    pub path: PathBuf,
    pub items: usize,
}

/// Fetches the listing for `category`, ranks it by `sort_key` and writes the CSV.
///
/// Nothing is written unless the fetch and the tile pairing both succeed.
pub async fn scrape_listing(config: &AppConfig, category: Category, sort_key: SortKey) -> Result<ScrapeReport> {
    let url = build_listing_url(&config.base_url, category)?;
    println!("{}", url);

    let client = build_client(config)?;
    let document = fetch_listing(&client, &url).await?;

    let mut items = extract_items(&document, &config.selectors)?;
    info!("Extracted {} items", items.len());

    sort_items(&mut items, sort_key);

    let path = write_csv_file(Path::new(&config.output_dir), category, sort_key, &items)?;
    println!(
        "{}",
        format!("Wrote {} items to {}", items.len(), path.display()).green()
    );

    Ok(ScrapeReport {
        path,
        items: items.len(),
    })
}
