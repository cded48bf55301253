use clap::Parser;

use crate::models::{Category, SortKey};

pub const USAGE: &str = "
Usage: supplement_scrape <product> <sortType>

product:
c - creatine
p - protein powder
w - pre-workout

sortType:
ps - price per serving
pr - price
s - serving quantity
";

#[derive(Parser, Debug)]
#[command(name = "supplement_scrape", override_help = USAGE)]
pub struct Cli {
    #[arg(value_enum)]
    pub product: Category,

    #[arg(value_enum)]
    pub sort_type: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_positionals() {
        let cli = Cli::try_parse_from(["supplement_scrape", "w", "pr"]).unwrap();
        assert_eq!(cli.product, Category::PreWorkout);
        assert_eq!(cli.sort_type, SortKey::Price);
    }

    #[test]
    fn rejects_unknown_product() {
        assert!(Cli::try_parse_from(["supplement_scrape", "x", "ps"]).is_err());
    }

    #[test]
    fn rejects_missing_sort_type() {
        assert!(Cli::try_parse_from(["supplement_scrape", "c"]).is_err());
    }
}
