//! Validation of numeric command-line input
//!
//! The t and increment arguments arrive as decimal strings and are kept as
//! strings until the precision context parses them, so validation happens at
//! the text level: digits and at most one decimal point, nothing else. The
//! same scan also counts decimal places, which the report formatter needs to
//! echo t at the precision the user typed it.

use crate::error::{Error, Result};

/// Longest accepted numeric argument, in bytes
pub const MAX_NUMERIC_LEN: usize = 98;

/// Validate `s` as a positive decimal literal and return its number of
/// decimal places.
///
/// Accepts ASCII digits with at most one `.`; requires at least one nonzero
/// digit (so `0` and `0.00` are rejected along with empty strings). Exponent
/// notation is deliberately not accepted.
pub fn decimal_places(arg: &'static str, s: &str) -> Result<usize> {
    if s.is_empty() {
        return Err(Error::invalid_argument(arg, "empty value"));
    }
    if s.len() > MAX_NUMERIC_LEN {
        return Err(Error::invalid_argument(
            arg,
            format!("longer than {} characters", MAX_NUMERIC_LEN),
        ));
    }
    if !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(Error::invalid_argument(
            arg,
            "only digits and a decimal point are allowed",
        ));
    }
    if s.matches('.').count() > 1 {
        return Err(Error::invalid_argument(arg, "more than one decimal point"));
    }
    if !s.chars().any(|c| c.is_ascii_digit() && c != '0') {
        return Err(Error::invalid_argument(arg, "must be a positive number"));
    }
    Ok(s.find('.').map_or(0, |dot| s.len() - dot - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_decimal_places() {
        assert_eq!(decimal_places("t", "100").unwrap(), 0);
        assert_eq!(decimal_places("t", "14.134725").unwrap(), 6);
        assert_eq!(decimal_places("t", "0.5").unwrap(), 1);
        assert_eq!(decimal_places("t", "7.").unwrap(), 0);
    }

    #[test]
    fn test_rejects_bad_syntax() {
        for bad in ["", "abc", "1.2.3", "1e5", "-3", "12,000", " 1"] {
            assert!(decimal_places("t", bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_rejects_zero() {
        for zero in ["0", "0.000", "00.0", "."] {
            assert!(decimal_places("t", zero).is_err(), "accepted {:?}", zero);
        }
    }

    #[test]
    fn test_rejects_overlong_input() {
        let long = "1".repeat(MAX_NUMERIC_LEN + 1);
        assert!(decimal_places("t", &long).is_err());
        let ok = "1".repeat(MAX_NUMERIC_LEN);
        assert!(decimal_places("t", &ok).is_ok());
    }
}
