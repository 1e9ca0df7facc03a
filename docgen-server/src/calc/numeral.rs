//! 人民币大写金额
//!
//! 金额先四舍五入到分，整数部分按万进分组:
//!
//! ```text
//! 1008        → 壹仟零捌元整
//! 100000      → 壹拾万元整
//! 1234.56     → 壹仟贰佰叁拾肆元伍角陆分
//! -12         → 负壹拾贰元整
//! ```

use rust_decimal::prelude::*;

use super::money::round_money;

const DIGITS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// 组内单位 (个、拾、佰、仟)
const UNITS: [&str; 4] = ["", "拾", "佰", "仟"];

/// 组单位; Decimal 整数部分最多 29 位，8 组足够
const GROUPS: [&str; 8] = ["", "万", "亿", "兆", "京", "垓", "秭", "穰"];

/// 金额转人民币大写
pub fn to_chinese_currency_words(amount: Decimal) -> String {
    let amount = round_money(amount);
    if amount.is_zero() {
        return "零元整".to_string();
    }
    if amount.is_sign_negative() {
        return format!("负{}", to_chinese_currency_words(amount.abs()));
    }

    let integer = amount.trunc();
    let cents = ((amount - integer) * Decimal::ONE_HUNDRED)
        .round()
        .to_u32()
        .unwrap_or(0);

    let mut words = integer_words(integer.to_u128().unwrap_or(0));
    if !words.is_empty() {
        words.push('元');
    }

    if cents == 0 {
        words.push('整');
        return words;
    }

    let (jiao, fen) = (cents / 10, cents % 10);
    if jiao > 0 {
        words.push(DIGITS[jiao as usize]);
        words.push('角');
    }
    if fen > 0 {
        words.push(DIGITS[fen as usize]);
        words.push('分');
    }
    words
}

/// 整数部分; 0 返回空串
fn integer_words(value: u128) -> String {
    if value == 0 {
        return String::new();
    }

    let mut digits: Vec<u8> = value.to_string().bytes().map(|b| b - b'0').collect();
    let pad = (4 - digits.len() % 4) % 4;
    digits.splice(0..0, std::iter::repeat_n(0, pad));

    let chunk_count = digits.len() / 4;
    let mut out = String::new();
    for (i, chunk) in digits.chunks(4).enumerate() {
        let chunk_text = chunk_words(chunk);
        if chunk_text.is_empty() {
            continue;
        }
        out.push_str(&chunk_text);
        out.push_str(GROUPS[chunk_count - 1 - i]);
    }
    out
}

/// 四位一组: 中间连续的零合并为一个「零」，首尾的零不读
fn chunk_words(chunk: &[u8]) -> String {
    let mut out = String::new();
    let mut pending_zero = false;
    for (i, &digit) in chunk.iter().enumerate() {
        if digit == 0 {
            if !out.is_empty() {
                pending_zero = true;
            }
            continue;
        }
        if pending_zero {
            out.push('零');
            pending_zero = false;
        }
        out.push(DIGITS[digit as usize]);
        out.push_str(UNITS[chunk.len() - 1 - i]);
    }
    out
}
