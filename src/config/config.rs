use std::time::Duration;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.gnc.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DEFAULT_PRICE_SELECTOR: &str = ".product-standard-price";
pub const DEFAULT_NAME_SELECTOR: &str = ".tile-product-name";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: Option<u64>,
    pub output_dir: String,
    pub selectors: SelectorConfig,
}

/// CSS selectors for the two tile kinds on the listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    pub price: String,
    pub name: String,
}

impl AppConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            output_dir: ".".to_string(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            price: DEFAULT_PRICE_SELECTOR.to_string(),
            name: DEFAULT_NAME_SELECTOR.to_string(),
        }
    }
}

/// Loads settings from the built-in defaults, an optional `Settings.toml`
/// and `APP_*` environment variables, later sources winning.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        .set_default("base_url", DEFAULT_BASE_URL)?
        .set_default("user_agent", DEFAULT_USER_AGENT)?
        .set_default("output_dir", ".")?
        .set_default("selectors.price", DEFAULT_PRICE_SELECTOR)?
        .set_default("selectors.name", DEFAULT_NAME_SELECTOR)?
        .add_source(File::new("Settings.toml", FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<AppConfig>()
}
