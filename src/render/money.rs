//! Money formatting
//!
//! Formats integer cent amounts in the statement's fixed USD style:
//! two decimals, comma thousands separators, `$` prefix. This is purely a
//! presentation concern; formatted strings never feed back into pricing
//! arithmetic.

use crate::types::Cents;

/// Format a cent amount as `$1,730.00`
///
/// Negative amounts never occur in statement data but render as
/// `-$123.45` rather than panicking.
pub fn format_money(amount: Cents) -> String {
    let magnitude = amount.unsigned_abs();
    let dollars = magnitude / 100;
    let cents = magnitude % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0, "$0.00")]
    #[case::cents_only(5, "$0.05")]
    #[case::no_grouping(65_000, "$650.00")]
    #[case::fixture_total(173_000, "$1,730.00")]
    #[case::six_digit_dollars(123_456_789, "$1,234,567.89")]
    #[case::exact_thousand(100_000, "$1,000.00")]
    #[case::negative(-12_345, "-$123.45")]
    fn test_format_money(#[case] amount: Cents, #[case] expected: &str) {
        assert_eq!(format_money(amount), expected);
    }
}
