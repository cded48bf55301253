pub mod build_listing_url;
pub mod fetch_listing;
pub mod logger;
pub mod sort_items;
pub mod write_csv;
