//! Display formatting for operand strings
//!
//! The integer portion is regrouped, the fractional portion is passed
//! through untouched so a half-typed `12.` or `0.50` displays as typed.

use crate::config::DisplayConfig;
use crate::core::number::{parse_float, shortest_digits};

/// Formats an operand with the default `,` grouping.
///
/// `"1234.5"` becomes `"1,234.5"`, `"."` stays `"."` and an empty or
/// non-numeric operand becomes `""`.
#[must_use]
pub fn format_for_display(value: &str) -> String {
    format_with(value, &DisplayConfig::default())
}

/// Formats an operand using `config`
#[must_use]
pub fn format_with(value: &str, config: &DisplayConfig) -> String {
    let mut parts = value.split('.');
    let integer = parts.next().unwrap_or_default();
    let decimal = parts.next();

    let integer_digits = parse_float(integer);
    let integer_display = if integer_digits.is_nan() {
        String::new()
    } else {
        format_integer(integer_digits, &config.thousands_separator)
    };

    match decimal {
        Some(decimal_digits) => format!("{integer_display}.{decimal_digits}"),
        None => integer_display,
    }
}

/// Rounds half away from zero and groups; `-0` keeps its sign
fn format_integer(value: f64, separator: &str) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = value.round();
    let grouped = group_digits(&integer_digits(rounded.abs()), separator);
    if rounded.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Plain digits of a non-negative integral value: shortest round-trip
/// digits padded with zeros, so `1e23` is a one followed by 23 zeros
fn integer_digits(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let (digits, n) = shortest_digits(value);
    let n = usize::try_from(n).unwrap_or(0);
    if digits.len() >= n {
        digits[..n.max(1)].to_string()
    } else {
        format!("{digits}{}", "0".repeat(n - digits.len()))
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    if separator.is_empty() {
        return digits.to_string();
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_integer_and_keeps_decimal() {
        assert_eq!(format_for_display("1234.5"), "1,234.5");
    }

    #[test]
    fn test_lone_decimal_point() {
        assert_eq!(format_for_display("."), ".");
    }

    #[test]
    fn test_empty_is_empty() {
        assert_eq!(format_for_display(""), "");
    }

    #[test]
    fn test_trailing_decimal_point_kept() {
        assert_eq!(format_for_display("12."), "12.");
        assert_eq!(format_for_display("1000."), "1,000.");
    }

    #[test]
    fn test_decimal_digits_not_grouped_or_trimmed() {
        assert_eq!(format_for_display("0.12345678"), "0.12345678");
        assert_eq!(format_for_display("3.500"), "3.500");
    }

    #[test]
    fn test_leading_zeros_collapse() {
        assert_eq!(format_for_display("0007"), "7");
        assert_eq!(format_for_display("00.5"), "0.5");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_for_display("999"), "999");
        assert_eq!(format_for_display("1000"), "1,000");
        assert_eq!(format_for_display("1234567"), "1,234,567");
        assert_eq!(format_for_display("-1234567"), "-1,234,567");
    }

    #[test]
    fn test_special_results() {
        assert_eq!(format_for_display("Infinity"), "∞");
        assert_eq!(format_for_display("-Infinity"), "-∞");
        assert_eq!(format_for_display("NaN"), "");
    }

    #[test]
    fn test_exponent_results() {
        assert_eq!(format_for_display("1e+21"), "1,000,000,000,000,000,000,000");
        assert_eq!(format_for_display("1.5e+21"), "1.5e+21");
        assert_eq!(format_for_display("5e-7"), "0");
    }

    #[test]
    fn test_large_integers_keep_typed_digits() {
        assert_eq!(
            format_for_display("100000000000000000000000"),
            "100,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_for_display("123456789012345678901"),
            "123,456,789,012,345,680,000"
        );
        assert_eq!(
            format_for_display("1e+23"),
            "100,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_for_display("-9007199254740993"),
            "-9,007,199,254,740,992"
        );
    }

    #[test]
    fn test_negative_zero_integer_part() {
        assert_eq!(format_for_display("-0.5"), "-0.5");
    }

    #[test]
    fn test_only_first_fraction_kept() {
        assert_eq!(format_for_display("1.2.3"), "1.2");
    }

    #[test]
    fn test_custom_separator() {
        let config = DisplayConfig::new().with_thousands_separator(" ");
        assert_eq!(format_with("1234567.25", &config), "1 234 567.25");
    }

    #[test]
    fn test_grouping_disabled() {
        let config = DisplayConfig::new().without_grouping();
        assert_eq!(format_with("1234567", &config), "1234567");
    }

    #[test]
    fn test_input_not_mutated_and_repeatable() {
        let input = String::from("98765.4");
        let first = format_for_display(&input);
        let second = format_for_display(&input);
        assert_eq!(first, second);
        assert_eq!(input, "98765.4");
    }
}
