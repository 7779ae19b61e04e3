//! Number rendering for text output.
//!
//! Thousands are grouped with `,` and the decimal separator is `.`
//! regardless of the system locale.

/// Formats a number with at most `max_decimals` fraction digits.
///
/// Trailing fractional zeros are dropped.
///
/// # Example
///
/// ```
/// use solara_format::format_number;
///
/// assert_eq!(format_number(2_100_000.0, 2), "2,100,000");
/// assert_eq!(format_number(0.8, 2), "0.8");
/// assert_eq!(format_number(4.256, 2), "4.26");
/// ```
#[must_use]
pub fn format_number(value: f64, max_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{value:.max_decimals$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |digits| ("-", digits));
    let sign = if digits.bytes().all(|b| b == b'0') && frac_part.is_empty() {
        ""
    } else {
        sign
    };

    let grouped = group_thousands(digits);
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Formats a COP amount rounded to whole pesos.
///
/// # Example
///
/// ```
/// use solara_format::format_currency;
///
/// assert_eq!(format_currency(370_400.0), "370,400 COP");
/// ```
#[must_use]
pub fn format_currency(value: f64) -> String {
    format!("{} COP", format_number(value, 0))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0, 2), "0");
        assert_eq!(format_number(550.0, 2), "550");
        assert_eq!(format_number(1_000.0, 2), "1,000");
        assert_eq!(format_number(18_900_000.0, 2), "18,900,000");
    }

    #[test]
    fn test_format_number_fraction() {
        assert_eq!(format_number(4.5, 2), "4.5");
        assert_eq!(format_number(4.25, 2), "4.25");
        assert_eq!(format_number(18.9, 2), "18.9");
        assert_eq!(format_number(1234.5678, 2), "1,234.57");
        assert_eq!(format_number(4.0, 2), "4");
    }

    #[test]
    fn test_format_number_negative_and_special() {
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(-0.001, 2), "0");
        assert_eq!(format_number(f64::INFINITY, 2), "inf");
        assert_eq!(format_number(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(370_400.0), "370,400 COP");
        assert_eq!(format_currency(18_900_000.0), "18,900,000 COP");
        assert_eq!(format_currency(926.4), "926 COP");
        assert_eq!(format_currency(2_100_000.0), "2,100,000 COP");
    }
}
