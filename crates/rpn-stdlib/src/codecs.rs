//! Numeric literal parsing.

/// Parse a token as a floating-point literal.
///
/// The whole token must be a literal: optional sign, digits with an optional
/// fractional part (a bare leading `.` is fine), optional exponent. Tokens
/// with trailing characters are rejected, as are tokens with no numeric
/// prefix. `inf` and `nan` spellings are accepted like any float parser would.
pub fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_literals() {
        assert_eq!(parse_number("3"), Some(3.0));
        assert_eq!(parse_number("-4"), Some(-4.0));
        assert_eq!(parse_number("+2.5"), Some(2.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
    }

    #[test]
    fn accepts_leading_and_trailing_point() {
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-.5"), Some(-0.5));
        assert_eq!(parse_number("5."), Some(5.0));
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert_eq!(parse_number("3x"), None);
        assert_eq!(parse_number("1.2.3"), None);
        assert_eq!(parse_number("1e"), None);
        assert_eq!(parse_number("4+"), None);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
    }

    #[test]
    fn accepts_special_forms() {
        assert_eq!(parse_number("inf"), Some(f64::INFINITY));
        assert!(parse_number("nan").is_some_and(f64::is_nan));
    }
}
