//! Numeric rounding and compact formatting.

/// Round `value` to `precision` fractional digits.
///
/// Halves round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`), so a
/// coordinate never flips direction depending on its sign. Values too large
/// to scale are returned as they are.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let pow = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * pow;
    if !scaled.is_finite() {
        return value;
    }
    round_half_up(scaled) / pow
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Format a number in its shortest path data form.
///
/// Integral values have no decimal point, negative zero prints as `0`,
/// scientific notation is never produced and the leading zero of a pure
/// fraction is dropped (`0.5` -> `.5`, `-0.5` -> `-.5`).
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let text = value.to_string();

    if 0.0 < value && value < 1.0 {
        if let Some(rest) = text.strip_prefix('0') {
            return rest.to_string();
        }
    }

    if -1.0 < value && value < 0.0 {
        if let Some(rest) = text.strip_prefix("-0") {
            return format!("-{rest}");
        }
    }

    text
}

/// Round (when a precision is given) and format one argument.
///
/// Returns the text together with the rounded value, which the serializer
/// needs to decide on separators.
pub fn round_and_format(value: f64, precision: Option<u32>) -> (String, f64) {
    let rounded = match precision {
        Some(precision) => round_to(value, precision),
        None => value,
    };
    (format_number(rounded), rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(1.23456, 0), 1.0);
        assert_eq!(round_to(-1.23456, 2), -1.23);
        assert_eq!(round_to(10.0, 5), 10.0);
    }

    #[test]
    fn test_round_to_out_of_range() {
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(-1e300, 10), -1e300);
        assert_eq!(round_to(1.5, u32::MAX), 1.5);
        assert_eq!(round_to(0.0, u32::MAX), 0.0);
    }

    #[test]
    fn test_round_and_format_huge_value_stays_numeric() {
        let (text, rounded) = round_and_format(1e300, Some(10));

        assert_eq!(rounded, 1e300);
        assert!(text.starts_with('1'));
        assert!(text.bytes().skip(1).all(|b| b == b'0'));
    }

    #[test]
    fn test_round_half_toward_positive() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(0.49999999999999994, 0), 0.0);
    }

    #[test]
    fn test_format_integral() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_strips_leading_zero() {
        assert_eq!(format_number(0.5), ".5");
        assert_eq!(format_number(-0.5), "-.5");
        assert_eq!(format_number(0.001), ".001");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(-1.5), "-1.5");
    }

    #[test]
    fn test_format_never_scientific() {
        assert_eq!(format_number(1e-7), ".0000001");
        assert_eq!(format_number(-2.5e-8), "-.000000025");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_round_and_format_tiny_negative() {
        let (text, rounded) = round_and_format(-0.0001, Some(2));
        assert_eq!(text, "0");
        assert_eq!(rounded, 0.0);
    }

    #[test]
    fn test_round_and_format_without_precision() {
        assert_eq!(round_and_format(0.123456789, None), (".123456789".to_string(), 0.123456789));
        assert_eq!(round_and_format(0.123456789, Some(3)), (".123".to_string(), 0.123));
    }
}
