use reqwest::{Client, Url};
use scraper::Html;
use tracing::info;

use crate::config::AppConfig;
use crate::error::{Result, ScrapeError};

/// Builds the HTTP client used for the listing request.
///
/// The storefront turns away default client identifiers, so the configured
/// browser user agent is always sent.
pub fn build_client(config: &AppConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| ScrapeError::Config {
        message: format!("failed to build HTTP client: {}", e),
    })
}

/// Fetches a listing page and parses it into a document.
pub async fn fetch_listing(client: &Client, url: &Url) -> Result<Html> {
    let fetch_error = |source: reqwest::Error| ScrapeError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = client.get(url.clone()).send().await.map_err(fetch_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(fetch_error)?;
    info!("Fetched {} bytes from {}", body.len(), url);

    Ok(Html::parse_document(&body))
}
