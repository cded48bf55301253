use crate::error::RecordError;

/// Parses the displayed price of a tile, e.g. `"$19.99"`.
///
/// The first character is taken to be the currency symbol and dropped; the
/// rest must be a plain period-decimal number.
pub fn extract_price(price_text: &str) -> Result<f64, RecordError> {
    let trimmed = price_text.trim();
    let mut chars = trimmed.chars();
    chars.next();
    let amount = chars.as_str();

    match amount.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(RecordError::InvalidPrice(trimmed.to_string())),
    }
}
