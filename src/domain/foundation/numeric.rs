//! Lenient number reading for AI-produced text.

/// Reads the decimal number at the start of `text`, ignoring leading
/// whitespace and any trailing characters.
///
/// `"8"`, `" 7.5 "`, `"8/10"` and `"9 out of 10"` all yield a number;
/// `"bad"`, `""` and `"/10"` yield `None`. Only finite values are returned.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_integers_and_decimals() {
        assert_eq!(parse_leading_number("8"), Some(8.0));
        assert_eq!(parse_leading_number("7.5"), Some(7.5));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("-3"), Some(-3.0));
    }

    #[test]
    fn ignores_trailing_text() {
        assert_eq!(parse_leading_number("8/10"), Some(8.0));
        assert_eq!(parse_leading_number("  6 out of 10"), Some(6.0));
        assert_eq!(parse_leading_number("4."), Some(4.0));
    }

    #[test]
    fn handles_exponents_only_when_complete() {
        assert_eq!(parse_leading_number("1e1"), Some(10.0));
        assert_eq!(parse_leading_number("3e"), Some(3.0));
        assert_eq!(parse_leading_number("2E+x"), Some(2.0));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_leading_number("bad"), None);
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("/10"), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("Infinity"), None);
    }

    #[test]
    fn rejects_overflowing_values() {
        assert_eq!(parse_leading_number("1e999"), None);
    }
}
