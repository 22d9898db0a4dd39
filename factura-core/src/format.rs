//! Spanish-locale display formatting for amounts, quantities, and rates.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::round_money;

/// Format a monetary amount with exactly two decimals and a decimal
/// comma: `1234.5` becomes `"1234,50"`.
pub fn money(value: Decimal) -> String {
    format!("{:.2}", round_money(value)).replace('.', ",")
}

/// Format a quantity with up to three decimals, trailing zeros
/// trimmed: `2.500` becomes `"2,5"`, `2.000` becomes `"2"`.
pub fn quantity(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero);
    trim_trailing(&rounded.to_string()).replace('.', ",")
}

/// Format a percentage with up to two decimals, trailing zeros
/// trimmed, plus the `%` sign: `21.00` becomes `"21%"`.
pub fn rate(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", trim_trailing(&rounded.to_string()).replace('.', ","))
}

fn trim_trailing(text: &str) -> String {
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    };
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
