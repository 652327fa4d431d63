//! Number parsing, display rounding and canonical formatting.

use crate::core::{CalcError, CalcResult};

/// Magnitude from which the canonical form switches to exponent notation
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which the canonical form switches to exponent notation
const EXPONENT_LOWER: f64 = 1e-6;

/// Parses a screen entry such as `"12"`, `"0."` or `"3.25"` into a number
pub fn parse_entry(text: &str) -> CalcResult<f64> {
    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidEntry(text.to_string()))
}

/// Rounds `value` to `places` fractional digits, halves away from zero.
///
/// Values too large to scale are returned unchanged; they carry no
/// fractional digits anyway.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Formats a number in its canonical shortest form.
///
/// Integers print without a fractional part, fractions without trailing
/// zeros, negative zero as `0`. Very large and very small magnitudes use
/// exponent notation with an explicit sign (`1e+21`, `1e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_UPPER || magnitude < EXPONENT_LOWER {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }

    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== parse_entry =====

    #[test]
    fn test_parse_entry_integer() {
        assert_eq!(parse_entry("42"), Ok(42.0));
    }

    #[test]
    fn test_parse_entry_fraction() {
        assert_eq!(parse_entry("3.25"), Ok(3.25));
    }

    #[test]
    fn test_parse_entry_trailing_point() {
        assert_eq!(parse_entry("5."), Ok(5.0));
        assert_eq!(parse_entry("0."), Ok(0.0));
    }

    #[test]
    fn test_parse_entry_negative_result() {
        assert_eq!(parse_entry("-2"), Ok(-2.0));
    }

    #[test]
    fn test_parse_entry_exponent() {
        assert_eq!(parse_entry("1e+21"), Ok(1e21));
    }

    #[test]
    fn test_parse_entry_invalid() {
        assert_eq!(
            parse_entry("Error"),
            Err(CalcError::InvalidEntry("Error".into()))
        );
    }

    // ===== round_to =====

    #[test]
    fn test_round_to_repeating_decimal() {
        assert_eq!(round_to(10.0 / 3.0, 6), 3.333333);
    }

    #[test]
    fn test_round_to_rounds_up() {
        assert_eq!(round_to(2.0 / 3.0, 6), 0.666667);
    }

    #[test]
    fn test_round_to_float_noise() {
        assert_eq!(round_to(0.1 + 0.2, 6), 0.3);
    }

    #[test]
    fn test_round_to_integer_unchanged() {
        assert_eq!(round_to(16.0, 6), 16.0);
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_round_to_huge_value_unchanged() {
        assert_eq!(round_to(1e305, 6), 1e305);
    }

    #[test]
    fn test_round_to_infinity_unchanged() {
        assert!(round_to(f64::INFINITY, 6).is_infinite());
    }

    // ===== format_number =====

    #[test]
    fn test_format_integer() {
        assert_eq!(format_number(16.0), "16");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_fraction() {
        assert_eq!(format_number(3.333333), "3.333333");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_large_integer_without_exponent() {
        assert_eq!(format_number(123_456_789_012.0), "123456789012");
    }

    #[test]
    fn test_format_exponent_large() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn test_format_exponent_small() {
        assert_eq!(format_number(1e-7), "1e-7");
    }

    #[test]
    fn test_format_smallest_display_step() {
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
