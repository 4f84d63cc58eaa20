/// Coerce raw field text to a number, substituting 0 for anything that does
/// not parse. This is a silent substitution by design of the input boundary:
/// an empty or garbled field behaves exactly like a zero field, and no error
/// is reported.
///
/// The text `"NaN"` also coerces to 0: a NaN input would slip past the
/// equality guards on the ratio divisors, and the input boundary's contract
/// is that every field enters the formulas as a real number or 0. Infinite
/// values parse and propagate; the display layer renders them as the
/// placeholder glyph.
pub fn coerce_number(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0)
}

/// Coerce an optional field, treating an absent field like an empty one.
pub fn coerce_optional(text: Option<&str>) -> f64 {
    text.map(coerce_number).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(coerce_number("1000"), 1000.0);
        assert_eq!(coerce_number("12.5"), 12.5);
        assert_eq!(coerce_number("-3"), -3.0);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(coerce_number("  42 "), 42.0);
    }

    #[test]
    fn non_numeric_text_becomes_zero() {
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("12,5"), 0.0);
    }

    #[test]
    fn nan_text_becomes_zero() {
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("nan"), 0.0);
        assert_eq!(coerce_number("-NaN"), 0.0);
    }

    #[test]
    fn infinite_text_parses_and_propagates() {
        assert_eq!(coerce_number("inf"), f64::INFINITY);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-inf"), f64::NEG_INFINITY);
    }

    #[test]
    fn absent_field_behaves_like_empty() {
        assert_eq!(coerce_optional(None), 0.0);
        assert_eq!(coerce_optional(Some("7")), 7.0);
    }
}
