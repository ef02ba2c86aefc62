//! Numeric input coercion.
//!
//! Configurator fields never reject input: anything that does not parse to a
//! finite number becomes `0.0`.

/// Parse a user-entered number, falling back to `0.0`.
///
/// Surrounding whitespace is ignored. Empty, unparseable, `NaN` and infinite
/// inputs all coerce to zero.
#[must_use]
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::coerce_number;

    #[rstest]
    #[case("120", 120.0)]
    #[case("  60 ", 60.0)]
    #[case("49.5", 49.5)]
    #[case("-3", -3.0)]
    #[case("", 0.0)]
    #[case("abc", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    fn coerces_with_zero_fallback(#[case] raw: &str, #[case] expected: f64) {
        assert!((coerce_number(raw) - expected).abs() < f64::EPSILON);
    }
}
