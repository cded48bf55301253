use reqwest::Url;

use crate::error::{Result, ScrapeError};
use crate::models::Category;

const START: usize = 0;
const PAGE_SIZE: usize = 100;

/// Builds the URL of the first listing page for a category.
pub fn build_listing_url(base_url: &str, category: Category) -> Result<Url> {
    let root = format!("{}/", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&root)
        .and_then(|root| root.join(category.path()))
        .map_err(|e| ScrapeError::Config {
            message: format!("invalid base URL {:?}: {}", base_url, e),
        })?;

    url.query_pairs_mut()
        .append_pair("start", &START.to_string())
        .append_pair("sz", &PAGE_SIZE.to_string());

    Ok(url)
}
