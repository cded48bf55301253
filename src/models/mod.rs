pub mod category;
pub mod item;
pub mod sort_key;

pub use category::Category;
pub use item::Item;
pub use sort_key::SortKey;
