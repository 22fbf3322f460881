// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Currency recovery and formatting
//
// Parsing tolerates three shapes: a properly masked amount
// ("R$ 1.234,56"), a bare digit run, and the malformed middle ground
// where upstream input dropped the grouping dots but kept the comma
// ("1234,567"). Currency input never hard-fails the user, so garbage
// parses to zero rather than an error.

use crate::mask::mask_currency;

/// Recover a non-negative decimal amount (major units) from a masked or
/// partially malformed currency string.
///
/// Rules, in order:
/// 1. only digits and commas survive the first pass;
/// 2. no comma: the whole run is a whole number of units;
/// 3. comma with at most two digits after it: standard decimal mark,
///    fraction right-padded to two digits ("1234,5" is 1234.50);
/// 4. comma with more than two digits after it: grouping was lost, so
///    when the combined run has at least five digits its last two are
///    reinterpreted as cents; shorter runs fall back to rule 3 with the
///    fraction truncated to two digits.
pub fn parse_amount(text: &str) -> f64 {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    match kept.rsplit_once(',') {
        None => to_amount(&kept, ""),
        Some((before, after)) => {
            let int_digits: String = before.chars().filter(char::is_ascii_digit).collect();
            if after.len() <= 2 {
                let frac = format!("{:0<2}", after);
                to_amount(&int_digits, &frac)
            } else {
                let run = format!("{int_digits}{after}");
                if run.len() >= 5 {
                    let (int_part, cents) = run.split_at(run.len() - 2);
                    to_amount(int_part, cents)
                } else {
                    to_amount(&int_digits, &after[..2])
                }
            }
        }
    }
}

/// Render a non-negative amount (major units) as a masked string.
///
/// Exact inverse of the well-formed parse path:
/// `parse_amount(&format_amount(x)) == x` for non-negative `x` with at
/// most two fraction digits. Zero renders empty so an untouched field
/// round-trips to empty, not "0,00". Negative or non-finite input is
/// outside the contract and renders empty as well.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return String::new();
    }
    let cents = (amount * 100.0).round() as u128;
    if cents == 0 {
        return String::new();
    }
    mask_currency(&cents.to_string())
}

fn to_amount(int_part: &str, frac: &str) -> f64 {
    if int_part.is_empty() && frac.is_empty() {
        return 0.0;
    }
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac = if frac.is_empty() { "0" } else { frac };
    // A digit run past f64 range parses to infinity; amounts must stay
    // finite, so such runs collapse to zero like any other garbage.
    format!("{int_part}.{frac}")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_input() {
        assert_eq!(parse_amount("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_amount("1.234,56"), 1234.56);
    }

    #[test]
    fn test_bare_digits_are_whole_units() {
        assert_eq!(parse_amount("1234"), 1234.0);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn test_short_fraction_pads_right() {
        assert_eq!(parse_amount("1234,5"), 1234.50);
        assert_eq!(parse_amount("1234,"), 1234.0);
    }

    #[test]
    fn test_malformed_grouping_recovery() {
        // Grouping dots lost upstream, comma survived: last two digits
        // of the combined run become the cents.
        assert_eq!(parse_amount("1234,567"), 12345.67);
        assert_eq!(parse_amount("12,345"), 123.45);
    }

    #[test]
    fn test_short_malformed_run_falls_back() {
        // Combined run under five digits: decimal-mark reading with the
        // fraction truncated to two digits.
        assert_eq!(parse_amount("1,234"), 1.23);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("R$ "), 0.0);
        assert_eq!(parse_amount(","), 0.0);
    }

    #[test]
    fn test_overlong_digit_run_stays_finite() {
        // Canonical currency input is unbounded; a run past f64 range
        // must not leak infinity into an amount.
        assert_eq!(parse_amount(&"9".repeat(400)), 0.0);
        assert_eq!(parse_amount(&format!("{},99", "9".repeat(400))), 0.0);
    }

    #[test]
    fn test_never_negative() {
        assert_eq!(parse_amount("-1234,56"), 1234.56);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.56), "1.234,56");
        assert_eq!(format_amount(0.5), "0,50");
        assert_eq!(format_amount(1_000_000.0), "1.000.000,00");
    }

    #[test]
    fn test_format_zero_is_empty() {
        assert_eq!(format_amount(0.0), "");
        assert_eq!(format_amount(-5.0), "");
        assert_eq!(format_amount(f64::NAN), "");
    }

    #[test]
    fn test_round_trip() {
        for amount in [0.01, 1.0, 12.34, 1234.56, 987_654_321.09] {
            assert_eq!(parse_amount(&format_amount(amount)), amount);
        }
        assert_eq!(parse_amount(&format_amount(0.0)), 0.0);
    }

    #[test]
    fn test_masked_prefix_round_trip() {
        assert_eq!(format_amount(parse_amount("R$ 1.234,56")), "1.234,56");
    }
}
