/// Parse a quantity typed into a form field.
///
/// Accepts only strictly positive integers; empty input, zero, negatives,
/// fractions and garbage all yield `None`.
pub fn parse_positive_quantity(raw: &str) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

/// Like [`parse_positive_quantity`] but also accepts zero.
pub fn parse_non_negative_quantity(raw: &str) -> Option<i32> {
    match raw.trim().parse::<i32>() {
        Ok(n) if n >= 0 => Some(n),
        _ => None,
    }
}
