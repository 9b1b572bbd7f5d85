//! Permissive numeric parsing for free-form manual entry.
//!
//! Slip fields are typed by hand, so parse failures are never surfaced as
//! errors: a value that does not parse is simply absent (or zero where the
//! caller needs a concrete amount). A string is "numeric" iff, after
//! normalization, it is non-empty and parses as a [`Decimal`].

use rust_decimal::Decimal;

/// Trims whitespace and removes commas (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into an optional [`Decimal`].
///
/// Returns `None` for empty or whitespace-only input, or when parsing
/// fails. Silent: classification (is this label a piece count?) runs
/// through here too, so non-numbers are ordinary input, not errors.
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().ok()
    }
}

/// Parses a string into a [`Decimal`], treating empty or unparsable input
/// as zero.
pub fn parse_decimal_or_zero(s: &str) -> Decimal {
    parse_optional_decimal(s).unwrap_or(Decimal::ZERO)
}

/// Whether the string parses entirely as a number.
pub fn is_numeric(s: &str) -> bool {
    parse_optional_decimal(s).is_some()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_plain_and_comma_separated_values() {
        assert_eq!(parse_optional_decimal("12.5"), Some(dec!(12.5)));
        assert_eq!(parse_optional_decimal("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_optional_decimal("  7 "), Some(dec!(7)));
    }

    #[test]
    fn empty_and_garbage_are_absent() {
        assert_eq!(parse_optional_decimal(""), None);
        assert_eq!(parse_optional_decimal("   "), None);
        assert_eq!(parse_optional_decimal("abc"), None);
        assert_eq!(parse_optional_decimal("12x"), None);
    }

    #[test]
    fn or_zero_degrades_instead_of_failing() {
        assert_eq!(parse_decimal_or_zero("30"), dec!(30));
        assert_eq!(parse_decimal_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_decimal_or_zero("n/a"), Decimal::ZERO);
    }

    #[test]
    fn numeric_check_matches_parse() {
        assert!(is_numeric("4"));
        assert!(is_numeric("-1.25"));
        assert!(!is_numeric("10/20"));
        assert!(!is_numeric(""));
    }
}
