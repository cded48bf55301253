pub mod extract_items;
pub mod extract_name_tile;
pub mod extract_price;

pub use extract_items::extract_items;
