//! Display formatting for rate amounts
//!
//! Uses rust_decimal so that binary float noise never reaches the table.

use rust_decimal::prelude::*;

/// Rounding for displayed amounts (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Format an amount with thousands separators and at most two decimals
///
/// `1250.0` -> `1,250`, `99.5` -> `99.5`, `1234567.891` -> `1,234,567.89`
pub fn format_amount(value: f64) -> String {
    let decimal = Decimal::from_f64(value)
        .unwrap_or_default()
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = decimal.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if decimal.is_sign_negative() && !decimal.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
