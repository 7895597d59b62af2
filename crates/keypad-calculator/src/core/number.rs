//! Operand string <-> number conversion
//!
//! Operands live as strings while they are typed. Reading them back uses
//! a lenient prefix parse (leading numeric prefix wins, trailing garbage is
//! ignored, no digits at all means NaN), and results are written back in
//! the shortest round-trip decimal form used by browser number-to-string.

/// Parses the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped, a single sign is accepted, and
/// `Infinity` is recognised. Returns NaN when no digits are found.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let trimmed = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (sign, body) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if body.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }

    let len = numeric_prefix_len(body);
    if len == 0 {
        return f64::NAN;
    }

    body[..len].parse::<f64>().map_or(f64::NAN, |v| sign * v)
}

/// Length in bytes of the `digits [. digits] [e [sign] digits]` prefix
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let count_digits = |from: usize| {
        bytes
            .iter()
            .skip(from)
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(0);
    let mut end = int_digits;
    let mut frac_digits = 0;

    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = count_digits(exp_start);
        // A dangling `e` is trailing garbage, not part of the number
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

/// Shortest round-trip significand digits of a positive finite `value`
/// and the position `n` of the decimal point, so that
/// `value == 0.digits × 10^n`.
pub(crate) fn shortest_digits(value: f64) -> (String, i32) {
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}

/// Formats a result the way a browser stringifies numbers.
///
/// Integers up to 21 digits print in full, small magnitudes down to
/// `1e-6` print as plain decimals, everything else switches to
/// exponent form (`1e+21`, `5e-7`).
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        // -0 prints as "0"
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value < 0.0 {
        return format!("-{}", number_to_string(-value));
    }

    let (digits, n) = shortest_digits(value);
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let exp = (n - 1).abs();
        if k == 1 {
            format!("{digits}e{sign}{exp}")
        } else {
            let (lead, rest) = digits.split_at(1);
            format!("{lead}.{rest}e{sign}{exp}")
        }
    }
}
