use std::fmt;

/// One product from the listing page.
///
/// Only built through the extractor, which guarantees `servings > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub brand: String,
    pub name: String,
    pub price: f64,
    pub servings: u32,
}

impl Item {
    pub fn price_per_serving(&self) -> f64 {
        self.price / f64::from(self.servings)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(")?;
        writeln!(f, "    Brand: {}", self.brand)?;
        writeln!(f, "    Name: {}", self.name)?;
        writeln!(f, "    Price: {}", self.price)?;
        writeln!(f, "    Servings: {}", self.servings)?;
        writeln!(f, "    Price per Serving: {:.2}", self.price_per_serving())?;
        write!(f, ")")
    }
}
