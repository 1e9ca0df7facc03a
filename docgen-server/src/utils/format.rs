//! 日期格式化
//!
//! 模板中的日期统一为 `YYYY年M月D日`。

use chrono::{DateTime, Datelike, Months, NaiveDate};

/// 解析 `YYYY-MM-DD` 或 RFC 3339 时间戳
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// `2024-03-01` → `2024年3月1日`
pub fn format_cn_date(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// 能解析则格式化，否则原样返回
pub fn format_date_text(value: &str) -> String {
    match parse_date(value) {
        Some(date) => format_cn_date(date),
        None => value.to_string(),
    }
}

/// 加若干年; 2月29日落到非闰年时取2月28日
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date_text() {
        assert_eq!(format_date_text("2024-03-01"), "2024年3月1日");
        assert_eq!(format_date_text("2024-12-25T08:00:00Z"), "2024年12月25日");
        assert_eq!(format_date_text("两年"), "两年");
        assert_eq!(format_date_text(""), "");
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(date(2024, 3, 1), 2), Some(date(2026, 3, 1)));
        assert_eq!(add_years(date(2024, 2, 29), 1), Some(date(2025, 2, 28)));
        assert_eq!(add_years(date(2024, 2, 29), 4), Some(date(2028, 2, 29)));
    }
}
