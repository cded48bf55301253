pub mod config;
pub mod error;
pub mod models;
pub mod scrape_listing;
pub mod scraping;
pub mod utilities;

pub use error::{RecordError, Result, ScrapeError};
pub use models::{Category, Item, SortKey};
pub use scrape_listing::{scrape_listing, ScrapeReport};
