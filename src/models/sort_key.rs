use std::cmp::Ordering;

use clap::ValueEnum;

use crate::models::Item;

/// Orderings the output can be ranked by. All ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// price per serving
    #[value(name = "ps")]
    PricePerServing,
    /// price
    #[value(name = "pr")]
    Price,
    /// serving quantity
    #[value(name = "s")]
    Servings,
}

impl SortKey {
    /// The command-line flag, also used in the output file name.
    pub fn flag(self) -> &'static str {
        match self {
            SortKey::PricePerServing => "ps",
            SortKey::Price => "pr",
            SortKey::Servings => "s",
        }
    }

    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::PricePerServing => a.price_per_serving().total_cmp(&b.price_per_serving()),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Servings => a.servings.cmp(&b.servings),
        }
    }
}
