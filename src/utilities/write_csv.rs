use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::models::{Category, Item, SortKey};

#[derive(Serialize)]
struct CsvRow<'a> {
    brand: &'a str,
    name: &'a str,
    price: f64,
    #[serde(rename = "serving")]
    servings: u32,
}

impl<'a> From<&'a Item> for CsvRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            brand: &item.brand,
            name: &item.name,
            price: item.price,
            servings: item.servings,
        }
    }
}

/// `<category-slug>-<sort-flag>.csv`
pub fn output_file_name(category: Category, key: SortKey) -> String {
    format!("{}-{}.csv", category.slug(), key.flag())
}

/// Writes `items` as CSV with a `brand,name,price,serving` header.
///
/// The header is written even when there are no items.
pub fn write_items<W: Write>(writer: W, items: &[Item]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(["brand", "name", "price", "serving"])?;
    for item in items {
        csv_writer.serialize(CsvRow::from(item))?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Creates (or truncates) the output file in `dir` and writes the items to it.
pub fn write_csv_file(dir: &Path, category: Category, key: SortKey, items: &[Item]) -> Result<PathBuf> {
    let path = dir.join(output_file_name(category, key));

    let file = File::create(&path)?;
    write_items(BufWriter::new(file), items)?;

    Ok(path)
}
