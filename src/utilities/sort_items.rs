use crate::models::{Item, SortKey};

/// Sorts ascending by `key`. Items with equal keys keep their extraction order.
pub fn sort_items(items: &mut [Item], key: SortKey) {
    items.sort_by(|a, b| key.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, servings: u32) -> Item {
        Item {
            brand: "GNC".to_string(),
            name: name.to_string(),
            price,
            servings,
        }
    }

    fn names(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn price_per_serving_ascending() {
        let mut items = vec![item("a", 10.0, 10), item("b", 30.0, 10), item("c", 10.0, 5)];
        sort_items(&mut items, SortKey::PricePerServing);
        assert_eq!(names(&items), vec!["a", "c", "b"]);
    }

    #[test]
    fn price_ascending() {
        let mut items = vec![item("a", 49.99, 30), item("b", 19.99, 90), item("c", 24.5, 60)];
        sort_items(&mut items, SortKey::Price);
        assert_eq!(names(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn servings_ascending() {
        let mut items = vec![item("a", 49.99, 30), item("b", 19.99, 90), item("c", 24.5, 60)];
        sort_items(&mut items, SortKey::Servings);
        assert_eq!(names(&items), vec!["a", "c", "b"]);
    }

    #[test]
    fn equal_keys_keep_extraction_order() {
        let mut items = vec![
            item("first", 20.0, 10),
            item("cheap", 5.0, 10),
            item("second", 40.0, 20),
            item("third", 2.0, 1),
        ];

        sort_items(&mut items, SortKey::PricePerServing);
        assert_eq!(names(&items), vec!["cheap", "first", "second", "third"]);

        let mut items = vec![item("x", 1.0, 30), item("y", 2.0, 30), item("z", 3.0, 30)];
        sort_items(&mut items, SortKey::Servings);
        assert_eq!(names(&items), vec!["x", "y", "z"]);
    }
}
