//! Numeric literal parsing and formatting with host number semantics.
//!
//! Stored numbers and dates are plain decimal strings, but values written by
//! other code sharing the backend may use any literal the host accepts:
//! surrounding whitespace, `0x`/`0o`/`0b` integers, exponents, `Infinity`.
//! Rust's `f64::from_str` differs from that grammar (it accepts `inf`,
//! `nan`, and rejects radix prefixes), so the grammar is checked here first.

/// Parse `raw` as a host numeric literal.
///
/// Returns `None` where host coercion would produce NaN, and for empty or
/// whitespace-only input. `Infinity` and literals too large for `f64`
/// parse to an infinite value.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_matches(is_host_whitespace);
    if s.is_empty() {
        return None;
    }

    if let Some(n) = parse_radix_integer(s) {
        return n;
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        parse_decimal(unsigned)?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Format `n` the way the host stringifies numbers.
///
/// Integral values carry no fractional part (`42`, not `42.0`), negative
/// zero prints as `0`, and non-finite values use the host spellings.
/// Magnitudes of at least `1e21` or below `1e-6` use exponent form with an
/// explicit sign (`1e+21`, `5e-324`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n == f64::INFINITY {
        "Infinity".to_owned()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_owned()
    } else if n == 0.0 {
        "0".to_owned()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exp = format!("{n:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        n.to_string()
    }
}

fn is_host_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// `Some(result)` when `s` carries a radix prefix, `None` otherwise.
fn parse_radix_integer(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    }))
}

fn parse_decimal(s: &str) -> Option<f64> {
    let first = *s.as_bytes().first()?;
    if !(first.is_ascii_digit() || first == b'.') {
        return None;
    }
    let allowed = |b: u8| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-');
    if !s.bytes().all(allowed) {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_decimals() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2.5E-1"), Some(0.25));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(parse_number("  12\n"), Some(12.0));
        assert_eq!(parse_number("\u{feff}1"), Some(1.0));
    }

    #[test]
    fn empty_and_blank_are_rejected() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
    }

    #[test]
    fn radix_prefixes() {
        assert_eq!(parse_number("0x1F"), Some(31.0));
        assert_eq!(parse_number("0o17"), Some(15.0));
        assert_eq!(parse_number("0b101"), Some(5.0));
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0xZZ"), None);
        assert_eq!(parse_number("-0x10"), None);
    }

    #[test]
    fn infinity_is_host_spelling_only() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn garbage_is_rejected() {
        for raw in ["abc", "NaN", "nan", "1_000", "12px", "--1", "1e", "."] {
            assert_eq!(parse_number(raw), None, "{raw:?} should not parse");
        }
    }

    #[test]
    fn formatting_matches_host() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-1e21), "-1e+21");
        assert_eq!(format_number(1.23e22), "1.23e+22");
        assert_eq!(format_number(1e300), "1e+300");
        assert_eq!(format_number(5e-324), "5e-324");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-1.5e-7), "-1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn formatted_values_parse_back() {
        for n in [1.0, -2.75, 1e21, -1.5e-7, 1e300, 5e-324, 123456789.123] {
            assert_eq!(parse_number(&format_number(n)), Some(n));
        }
    }
}
