//! Input validation helpers
//!
//! Text length limits and the checks shared by the document handlers.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calc::money::to_decimal;
use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Names: project, customer, contract
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: contract number, dates
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Convert a wire number to Decimal; values Decimal cannot hold fail with `code`.
pub fn parse_decimal(value: f64, field: &str, code: ErrorCode) -> Result<Decimal, AppError> {
    to_decimal(value).ok_or_else(|| {
        AppError::with_message(code, format!("{field} is out of range, got {value}"))
            .with_detail("field", field)
    })
}

/// Optional amount (e.g. currentInvestment); sign checks stay with the calculator.
pub fn parse_optional_amount(value: Option<f64>, field: &str) -> Result<Option<Decimal>, AppError> {
    value
        .map(|v| parse_decimal(v, field, ErrorCode::InvalidAmount))
        .transpose()
}

/// Validate that an amount is finite, strictly positive and representable.
pub fn validate_positive_amount(value: f64, field: &str) -> Result<Decimal, AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidContractAmount,
            format!("{field} must be greater than 0"),
        )
        .with_detail("field", field));
    }
    parse_decimal(value, field, ErrorCode::InvalidContractAmount)
}

/// Parse a `YYYY-MM-DD` date.
pub fn validate_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidDate,
            format!("{field} must be a date in YYYY-MM-DD format, got {value}"),
        )
        .with_detail("field", field)
    })
}
