//! Money utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for serialization. Formatting helpers produce the strings that end up in
//! formulas and templates.

use rust_decimal::prelude::*;

/// Rounding: 2 decimal places, half away from zero
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// `None` for NaN, infinities and magnitudes beyond Decimal's range (~7.9e28).
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64 for the wire, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Round to cents (half away from zero)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Insert thousands separators into a plain digit string
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn format_grouped(value: Decimal) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// 公式中的操作数: 千分位，去掉多余的尾随零
///
/// `100000` → `100,000`, `1234.50` → `1,234.5`
pub fn format_thousands(value: Decimal) -> String {
    format_grouped(value.normalize())
}

/// 千分位 + 固定两位小数: `30000` → `30,000.00`
pub fn format_simple(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(DECIMAL_PLACES);
    format_grouped(rounded)
}

/// 人民币金额: `¥30,000.00`
pub fn format_currency(value: Decimal) -> String {
    let simple = format_simple(value);
    match simple.strip_prefix('-') {
        Some(abs) => format!("-¥{abs}"),
        None => format!("¥{simple}"),
    }
}

/// 比例 (小数) 转百分比文本: `0.3` → `30%`, `0.035` → `3.5%`
pub fn format_percent(ratio: Decimal) -> String {
    format!("{}%", (ratio * Decimal::ONE_HUNDRED).normalize())
}
