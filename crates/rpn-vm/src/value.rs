//! Text form of stack values.

/// Magnitudes at or above this switch to exponent notation.
const EXP_UPPER: f64 = 1e16;
/// Non-zero magnitudes below this switch to exponent notation.
const EXP_LOWER: f64 = 1e-4;

/// Format a value with the shortest text that reads back to the same `f64`.
///
/// Whole numbers print without a fractional part and very large or very
/// small magnitudes use exponent notation, the way `%g` would, but without
/// `%g`'s six-digit rounding.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        let magnitude = value.abs();
        if magnitude != 0.0 && !(EXP_LOWER..EXP_UPPER).contains(&magnitude) {
            format!("{value:e}")
        } else {
            format!("{value}")
        }
    }
}

/// Format a value with six fixed decimals, as used by the window view.
pub fn format_fixed(value: f64) -> String {
    format!("{value:.6}")
}
