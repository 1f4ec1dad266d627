/// Parses the leading integer of a string the way a lenient integer parser
/// does.
///
/// Leading whitespace is skipped and an optional `+` or `-` sign is accepted.
/// A `0x` or `0X` prefix switches to base 16. Digits are consumed until the
/// first character that is not a digit of the active base; everything after
/// that is ignored. If no digit is found, the result is `NaN`.
///
/// This never fails. Text without a numeric prefix yields `NaN`, which then
/// flows through later arithmetic unchanged.
///
/// # Parameters
/// - `text`: The string to parse.
///
/// # Returns
/// The parsed integer as `f64`, or `f64::NAN`.
///
/// # Example
/// ```
/// use opertree::util::num::parse_int;
///
/// assert_eq!(parse_int("42"), 42.0);
/// assert_eq!(parse_int("  -17px"), -17.0);
/// assert_eq!(parse_int("3.9"), 3.0);
/// assert_eq!(parse_int("0x1f"), 31.0);
/// assert!(parse_int("abc").is_nan());
/// assert!(parse_int("").is_nan());
/// ```
#[must_use]
pub fn parse_int(text: &str) -> f64 {
    let trimmed = text.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        _ => (10, unsigned),
    };

    let mut seen_digit = false;
    let mut magnitude = 0.0_f64;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        magnitude = magnitude.mul_add(f64::from(radix), f64::from(digit));
    }

    if !seen_digit {
        return f64::NAN;
    }

    if negative { -magnitude } else { magnitude }
}

/// Magnitude from which numbers print in exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Magnitude below which numbers print in exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Formats a number as text.
///
/// Uses the shortest digits that read back as the same number. Whole numbers
/// print without a fractional part, `NaN` prints as `NaN` and infinities print
/// as `Infinity` / `-Infinity`. Negative zero prints as `0`. Magnitudes of
/// `1e21` and above, or below `1e-6`, print in exponent notation with an
/// explicitly signed exponent (`1e+21`, `1.5e-7`).
///
/// # Parameters
/// - `value`: The number to format.
///
/// # Returns
/// The textual form of `value`.
///
/// # Example
/// ```
/// use opertree::util::num::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
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
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let formatted = format!("{value:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }

    format!("{value}")
}

/// Converts a length to `f64`.
///
/// Exact for every length up to `2^53`.
///
/// # Parameters
/// - `length`: A collection length.
///
/// # Returns
/// The length as `f64`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn length_to_f64(length: usize) -> f64 {
    length as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_stops_at_first_non_digit() {
        assert_eq!(parse_int("12abc34"), 12.0);
        assert_eq!(parse_int("007"), 7.0);
        assert_eq!(parse_int("+8"), 8.0);
    }

    #[test]
    fn parse_int_without_digits_is_nan() {
        assert!(parse_int("-").is_nan());
        assert!(parse_int("   ").is_nan());
        assert!(parse_int("0x").is_nan());
        assert!(parse_int(".5").is_nan());
    }

    #[test]
    fn parse_int_handles_hex_prefix_and_sign() {
        assert_eq!(parse_int("-0xFF"), -255.0);
        assert_eq!(parse_int("0Xa"), 10.0);
    }

    #[test]
    fn format_number_handles_special_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.125), "0.125");
    }

    #[test]
    fn format_number_switches_to_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn length_conversion_is_exact_for_small_lengths() {
        assert_eq!(length_to_f64(0), 0.0);
        assert_eq!(length_to_f64(3), 3.0);
    }
}
