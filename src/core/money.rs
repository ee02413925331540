//! Presentation rounding and display of currency amounts.
//!
//! Running totals stay unrounded; these helpers are applied only when an
//! amount is printed or stored as a presentation value.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round to 2 decimal places using half-up (commercial rounding).
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Digit grouping used when rendering the integer part of an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitGrouping {
    /// `12,34,567.89`: last three digits, then pairs.
    #[default]
    Indian,
    /// `1,234,567.89`: groups of three.
    Western,
}

/// Round to 2 places and render with digit separators.
///
/// ```
/// use bijak::core::*;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_amount(dec!(1234567.891), DigitGrouping::Indian), "12,34,567.89");
/// assert_eq!(format_amount(dec!(1234567.891), DigitGrouping::Western), "1,234,567.89");
/// ```
pub fn format_amount(amount: Decimal, grouping: DigitGrouping) -> String {
    let rounded = round_money(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let grouped = group_digits(int_part, grouping);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
