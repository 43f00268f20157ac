//! Currency formatting and amount parsing.
//!
//! Amounts are Colombian pesos presented with es-CO conventions: `$`
//! prefix, `.` as the grouping separator, `,` as the decimal separator,
//! and no decimal digits (e.g. 1500000 -> `$1.500.000`).

use log::error;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::errors::{Result, ValidationError};

/// Formats an amount for display: `$` prefix, dot-grouped, no decimals.
pub fn format_cop(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_i128().unwrap_or(0).to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Parses an amount typed by the user.
///
/// A comma decimal separator is tolerated (`"2500,5"` -> 2500.5), matching
/// what the entry screens have always accepted.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("monto".to_string()).into());
    }
    let normalized = trimmed.replace(',', ".");
    Decimal::from_str(&normalized)
        .map_err(|_| ValidationError::InvalidAmount(input.to_string()).into())
}

/// Parses a user-typed amount that may carry display grouping
/// (`"2.500.000"`, optionally with a comma decimal part). Unlike
/// `parse_stored_amount` this is strict: anything non-numeric is a
/// validation error, never zero.
pub fn parse_formatted_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim().trim_start_matches('$');
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField("monto".to_string()).into());
    }
    let normalized = if looks_grouped(trimmed) {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.replace(',', ".")
    };
    Decimal::from_str(&normalized)
        .map_err(|_| ValidationError::InvalidAmount(input.to_string()).into())
}

/// Parses an amount read back from storage, tolerating legacy formats.
///
/// Canonical rows hold a plain decimal string and parse directly. Older
/// rows were written locale-formatted (`"1.500.000"`, optionally with a
/// comma decimal part); those are detected by their dot-grouped shape,
/// stripped, and re-parsed. Anything else falls back to zero with an
/// error log rather than failing the read, so one bad row cannot poison
/// a whole listing.
pub fn parse_stored_amount(value: &str) -> Decimal {
    let trimmed = value.trim().trim_start_matches('$');

    if looks_grouped(trimmed) {
        let normalized = trimmed.replace('.', "").replace(',', ".");
        if let Ok(d) = Decimal::from_str(&normalized) {
            return d;
        }
    }

    match Decimal::from_str(trimmed) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to parse stored amount '{}': {}. Falling back to ZERO.", value, e);
            Decimal::ZERO
        }
    }
}

/// True for es-CO grouped integers: 1-3 leading digits, then dot-separated
/// groups of exactly three, with an optional comma decimal tail.
fn looks_grouped(value: &str) -> bool {
    let integer_part = value.split(',').next().unwrap_or(value);
    let mut groups = integer_part.split('.');
    let first = match groups.next() {
        Some(g) => g,
        None => return false,
    };
    if first.is_empty() || first.len() > 3 || !first.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut saw_group = false;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        saw_group = true;
    }
    saw_group
}

/// Canonical storage form of an amount: a plain decimal string.
pub fn to_stored_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_cop_grouping() {
        assert_eq!(format_cop(dec!(1500000)), "$1.500.000");
        assert_eq!(format_cop(dec!(250000)), "$250.000");
        assert_eq!(format_cop(dec!(0)), "$0");
        assert_eq!(format_cop(dec!(999)), "$999");
        assert_eq!(format_cop(dec!(1000)), "$1.000");
    }

    #[test]
    fn test_format_cop_drops_decimals() {
        assert_eq!(format_cop(dec!(2500.4)), "$2.500");
        assert_eq!(format_cop(dec!(2500.5)), "$2.501");
    }

    #[test]
    fn test_format_cop_negative() {
        assert_eq!(format_cop(dec!(-1500000)), "-$1.500.000");
    }

    #[test]
    fn test_parse_amount_plain_and_comma() {
        assert_eq!(parse_amount("1500000").unwrap(), dec!(1500000));
        assert_eq!(parse_amount("2500,5").unwrap(), dec!(2500.5));
        assert_eq!(parse_amount(" 42 ").unwrap(), dec!(42));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12a").is_err());
    }

    #[test]
    fn test_parse_formatted_amount_accepts_grouped_and_plain() {
        assert_eq!(parse_formatted_amount("2.500.000").unwrap(), dec!(2500000));
        assert_eq!(parse_formatted_amount("$1.500.000,75").unwrap(), dec!(1500000.75));
        assert_eq!(parse_formatted_amount("1500000").unwrap(), dec!(1500000));
    }

    #[test]
    fn test_parse_formatted_amount_rejects_garbage() {
        assert!(parse_formatted_amount("abc").is_err());
        assert!(parse_formatted_amount("12a").is_err());
        assert!(parse_formatted_amount("").is_err());
    }

    #[test]
    fn test_stored_amount_round_trip() {
        let stored = to_stored_amount(dec!(1500000));
        assert_eq!(parse_stored_amount(&stored), dec!(1500000));
    }

    #[test]
    fn test_parse_stored_amount_legacy_grouped() {
        assert_eq!(parse_stored_amount("1.500.000"), dec!(1500000));
        assert_eq!(parse_stored_amount("$1.500.000"), dec!(1500000));
        assert_eq!(parse_stored_amount("250.000"), dec!(250000));
    }

    #[test]
    fn test_parse_stored_amount_canonical_fraction() {
        assert_eq!(parse_stored_amount("2500.5"), dec!(2500.5));
        assert_eq!(parse_stored_amount("1.500.000,75"), dec!(1500000.75));
    }

    #[test]
    fn test_parse_stored_amount_unreadable_is_zero() {
        assert_eq!(parse_stored_amount("n/a"), Decimal::ZERO);
    }
}
