use htmlentity::entity::{decode, ICodedDataTrait};

use crate::error::RecordError;

/// Fields read from a product name tile.
#[derive(Debug, Clone, PartialEq)]
pub struct NameTile {
    pub brand: String,
    pub name: String,
    pub servings: u32,
}

/// Parses the text of a name tile.
///
/// The storefront renders the brand on the first line and
/// `"<title> (<N> servings)"` on the second:
///
/// ```text
/// GNC
/// Mega Men - Multivitamin (90 servings)
/// ```
///
/// Only the leading number of the parenthesised clause is read, whatever unit follows it.
pub fn extract_name_tile(tile_text: &str) -> Result<NameTile, RecordError> {
    let decoded = decode(tile_text.as_bytes())
        .to_string()
        .map_err(|err| RecordError::Entity(err.to_string()))?;

    let mut lines = decoded.trim().split('\n');
    let brand = lines.next().unwrap_or_default().trim().to_string();
    let second_line = lines.next().ok_or(RecordError::MissingSecondLine)?.trim();

    let (name, serving_clause) = second_line
        .split_once('(')
        .ok_or_else(|| RecordError::MissingServingClause(second_line.to_string()))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(RecordError::EmptyName(second_line.to_string()));
    }

    let count = serving_clause.split_whitespace().next().unwrap_or_default();
    let servings = count
        .parse::<u32>()
        .map_err(|_| RecordError::InvalidServings(count.to_string()))?;
    if servings == 0 {
        return Err(RecordError::ZeroServings);
    }

    Ok(NameTile {
        brand,
        name: name.to_string(),
        servings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_brand_name_and_servings() {
        let tile = extract_name_tile("GNC\nMega Men - Multivitamin (90 servings)").unwrap();
        assert_eq!(
            tile,
            NameTile {
                brand: "GNC".to_string(),
                name: "Mega Men - Multivitamin".to_string(),
                servings: 90,
            }
        );
    }

    #[test]
    fn decodes_entities_and_trims() {
        let tile = extract_name_tile(
            "\n   Optimum Nutrition\nGold Standard 100&#37; Whey &amp; Casein (74 servings)\n ",
        )
        .unwrap();
        assert_eq!(tile.brand, "Optimum Nutrition");
        assert_eq!(tile.name, "Gold Standard 100% Whey & Casein");
        assert_eq!(tile.servings, 74);
    }

    #[test]
    fn ignores_unit_and_anything_after_the_count() {
        let tile = extract_name_tile("Beyond Raw\nLIT (30 scoops) - Sour Candy").unwrap();
        assert_eq!(tile.servings, 30);
    }

    #[test]
    fn missing_second_line() {
        assert_eq!(
            extract_name_tile("GNC"),
            Err(RecordError::MissingSecondLine)
        );
    }

    #[test]
    fn missing_serving_clause() {
        assert_eq!(
            extract_name_tile("GNC\nShaker Bottle"),
            Err(RecordError::MissingServingClause("Shaker Bottle".to_string()))
        );
    }

    #[test]
    fn empty_name() {
        assert!(matches!(
            extract_name_tile("GNC\n(30 servings)"),
            Err(RecordError::EmptyName(_))
        ));
    }

    #[test]
    fn non_numeric_serving_count() {
        assert_eq!(
            extract_name_tile("GNC\nAMP Wheybolic (about 20 servings)"),
            Err(RecordError::InvalidServings("about".to_string()))
        );
        assert_eq!(
            extract_name_tile("GNC\nAMP Wheybolic ()"),
            Err(RecordError::InvalidServings(")".to_string()))
        );
    }

    #[test]
    fn zero_servings() {
        assert_eq!(
            extract_name_tile("GNC\nSample Pack (0 servings)"),
            Err(RecordError::ZeroServings)
        );
    }
}
