//! 金额计算模块
//!
//! 付款金额、保函金额与中文大写金额的纯函数实现。
//!
//! - [`ratio`] - 比例表 (唯一数据源，进程内共享)
//! - [`payment`] - 付款金额计算
//! - [`guarantee`] - 保函金额计算
//! - [`numeral`] - 人民币大写
//! - [`money`] - Decimal 转换与金额格式化

pub mod guarantee;
pub mod money;
pub mod numeral;
pub mod payment;
pub mod ratio;

pub use guarantee::{GuaranteeInput, compute_guarantee_amount, guarantee_ratio};
pub use numeral::to_chinese_currency_words;
pub use payment::{PaymentCalculationResult, PaymentInput, compute_payment};
pub use ratio::RatioTable;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// 输入不合法的具体原因，决定对外的错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// 合同金额缺失或 <= 0
    ContractAmount,
    /// 按进度客户缺少本期投资额 / 已付金额
    MissingProgressiveField,
    /// 该客户类型没有付款比例表
    UnsupportedCustomerClass,
    /// 比例不在 0-100 之间
    Ratio,
    /// 金额为负
    Amount,
}

/// 计算错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{message}")]
    InvalidInput {
        kind: InvalidInputKind,
        message: String,
    },
}

impl CalcError {
    pub fn invalid(kind: InvalidInputKind, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> InvalidInputKind {
        match self {
            Self::InvalidInput { kind, .. } => *kind,
        }
    }
}

impl From<CalcError> for AppError {
    fn from(err: CalcError) -> Self {
        let code = match err.kind() {
            InvalidInputKind::ContractAmount => ErrorCode::InvalidContractAmount,
            InvalidInputKind::MissingProgressiveField => ErrorCode::MissingProgressiveField,
            InvalidInputKind::UnsupportedCustomerClass => ErrorCode::UnsupportedCustomerClass,
            InvalidInputKind::Ratio => ErrorCode::InvalidRatio,
            InvalidInputKind::Amount => ErrorCode::InvalidAmount,
        };
        AppError::with_message(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_calc_error_maps_to_bad_request() {
        let err = CalcError::invalid(
            InvalidInputKind::MissingProgressiveField,
            "currentInvestment is required",
        );
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::MissingProgressiveField);
        assert_eq!(app.message, "currentInvestment is required");
        assert_eq!(app.http_status(), StatusCode::BAD_REQUEST);
    }
}
