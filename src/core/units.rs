//! Integer units shared by model space and view space.
//! Model space is whatever the host loads (usually milliseconds), view space is pixels.

/// A position or width on either axis
pub type Unit = i64;

/// Convert an integer amount into label units
#[inline]
pub fn to_label_units(value: Unit, multiplier: f64) -> f64 {
    value as f64 * multiplier
}

/// Format a label value with one decimal place followed by the unit suffix
pub fn format_label(value: f64, unit: &str) -> String {
    if unit.is_empty() {
        format!("{:.1}", value)
    } else {
        format!("{:.1} {}", value, unit)
    }
}

/// Integer division rounding toward negative infinity
#[inline]
pub(crate) fn div_floor(numerator: i128, denominator: i128) -> i128 {
    numerator.div_euclid(denominator) - if denominator < 0 && numerator.rem_euclid(denominator) != 0 { 1 } else { 0 }
}

/// Integer division rounding to the nearest integer, ties toward positive infinity
#[inline]
pub(crate) fn div_round(numerator: i128, denominator: i128) -> i128 {
    if denominator < 0 {
        return div_round(-numerator, -denominator);
    }
    div_floor(2 * numerator + denominator, 2 * denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_units() {
        assert!((to_label_units(4_000, 0.001) - 4.0).abs() < 1e-9);
        assert_eq!(to_label_units(-250, 1.0), -250.0);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(4.0, "s"), "4.0 s");
        assert_eq!(format_label(12.345, "s"), "12.3 s");
        assert_eq!(format_label(7.0, ""), "7.0");
    }

    #[test]
    fn test_div_floor() {
        assert_eq!(div_floor(7, 2), 3);
        assert_eq!(div_floor(-7, 2), -4);
        assert_eq!(div_floor(7, -2), -4);
        assert_eq!(div_floor(-7, -2), 3);
        assert_eq!(div_floor(-6, 2), -3);
    }

    #[test]
    fn test_div_round() {
        assert_eq!(div_round(10, 3), 3);
        assert_eq!(div_round(11, 3), 4);
        // ties go up
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(-5, 2), -2);
        assert_eq!(div_round(-11, 3), -4);
        assert_eq!(div_round(10, -4), -2);
    }
}
