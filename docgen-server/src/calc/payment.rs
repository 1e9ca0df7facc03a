//! 付款金额计算
//!
//! - 工务署: 合同金额 × 固定比例
//! - 华为 / 建筑公司 (按进度):
//!   - 预付款、质保金: 合同金额 × 比例
//!   - 到货款、竣工款: 本期投资额 × 比例 - 已付金额
//!
//! 结果统一保留两位小数 (四舍五入)，负数按 0 处理。

use rust_decimal::Decimal;
use shared::models::{CustomerClass, PaymentKind};

use super::money::{format_percent, format_simple, format_thousands, round_money};
use super::numeral::to_chinese_currency_words;
use super::ratio::RatioTable;
use super::{CalcError, InvalidInputKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInput {
    pub customer_class: CustomerClass,
    pub payment_kind: PaymentKind,
    pub contract_amount: Decimal,
    /// 本期投资额
    pub current_investment: Option<Decimal>,
    /// 已付金额
    pub previously_paid: Option<Decimal>,
}

impl PaymentInput {
    pub fn new(
        customer_class: CustomerClass,
        payment_kind: PaymentKind,
        contract_amount: Decimal,
    ) -> Self {
        Self {
            customer_class,
            payment_kind,
            contract_amount,
            current_investment: None,
            previously_paid: None,
        }
    }

    pub fn with_progress(
        mut self,
        current_investment: Option<Decimal>,
        previously_paid: Option<Decimal>,
    ) -> Self {
        self.current_investment = current_investment;
        self.previously_paid = previously_paid;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCalculationResult {
    /// 付款金额 (两位小数, >= 0)
    pub amount: Decimal,
    pub amount_in_words: String,
    pub amount_in_simple: String,
    pub calculation_formula: String,
}

/// 计算付款金额
pub fn compute_payment(
    table: &RatioTable,
    input: &PaymentInput,
) -> Result<PaymentCalculationResult, CalcError> {
    if input.contract_amount <= Decimal::ZERO {
        return Err(CalcError::invalid(
            InvalidInputKind::ContractAmount,
            format!(
                "Contract amount must be greater than 0, got {}",
                input.contract_amount
            ),
        ));
    }
    for (field, value) in [
        ("currentInvestment", input.current_investment),
        ("previouslyPaid", input.previously_paid),
    ] {
        if let Some(v) = value
            && v.is_sign_negative()
            && !v.is_zero()
        {
            return Err(CalcError::invalid(
                InvalidInputKind::Amount,
                format!("{field} must not be negative, got {v}"),
            ));
        }
    }

    let ratio = table
        .payment_ratio(input.customer_class, input.payment_kind)
        .ok_or_else(|| {
            CalcError::invalid(
                InvalidInputKind::UnsupportedCustomerClass,
                format!(
                    "Customer class {} has no payment ratio table",
                    input.customer_class
                ),
            )
        })?;

    let uses_investment = input.customer_class.is_progressive()
        && matches!(
            input.payment_kind,
            PaymentKind::Delivery | PaymentKind::Completion
        );

    let (raw, formula) = if uses_investment {
        let investment = require_progress_field(input.current_investment, "currentInvestment")?;
        let paid = require_progress_field(input.previously_paid, "previouslyPaid")?;
        (
            investment * ratio - paid,
            format!(
                "{} × {} - {}",
                format_thousands(investment),
                format_percent(ratio),
                format_thousands(paid)
            ),
        )
    } else {
        (
            input.contract_amount * ratio,
            format!(
                "{} × {}",
                format_thousands(input.contract_amount),
                format_percent(ratio)
            ),
        )
    };

    let mut amount = round_money(raw);
    if amount.is_sign_negative() {
        tracing::debug!(
            customer = %input.customer_class,
            payment = %input.payment_kind,
            raw = %raw,
            "Negative payment amount clamped to zero"
        );
        amount = Decimal::ZERO;
    }

    Ok(PaymentCalculationResult {
        amount,
        amount_in_words: to_chinese_currency_words(amount),
        amount_in_simple: format_simple(amount),
        calculation_formula: formula,
    })
}

fn require_progress_field(value: Option<Decimal>, field: &str) -> Result<Decimal, CalcError> {
    value.ok_or_else(|| {
        CalcError::invalid(
            InvalidInputKind::MissingProgressiveField,
            format!("{field} is required for progressive customers"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn compute(input: PaymentInput) -> Result<PaymentCalculationResult, CalcError> {
        compute_payment(&RatioTable::default(), &input)
    }

    #[test]
    fn test_works_bureau_flat_ratios() {
        let cases = [
            (PaymentKind::Advance, "30000.00", "100,000 × 30%"),
            (PaymentKind::Delivery, "50000.00", "100,000 × 50%"),
            (PaymentKind::Completion, "10000.00", "100,000 × 10%"),
            (PaymentKind::Warranty, "10000.00", "100,000 × 10%"),
        ];
        for (kind, amount, formula) in cases {
            let result =
                compute(PaymentInput::new(CustomerClass::WorksBureau, kind, d("100000"))).unwrap();
            assert_eq!(result.amount, d(amount), "{kind}");
            assert_eq!(result.calculation_formula, formula);
        }
    }

    #[test]
    fn test_works_bureau_rounds_to_cents() {
        let result = compute(PaymentInput::new(
            CustomerClass::WorksBureau,
            PaymentKind::Advance,
            d("1234.57"),
        ))
        .unwrap();
        // 1234.57 × 0.30 = 370.371
        assert_eq!(result.amount, d("370.37"));
        assert_eq!(result.amount_in_simple, "370.37");
        assert_eq!(result.amount_in_words, "叁佰柒拾元叁角柒分");
    }

    #[test]
    fn test_works_bureau_ignores_progress_fields() {
        let result = compute(
            PaymentInput::new(CustomerClass::WorksBureau, PaymentKind::Delivery, d("1000"))
                .with_progress(Some(d("999999")), Some(d("1"))),
        )
        .unwrap();
        assert_eq!(result.amount, d("500"));
    }

    #[test]
    fn test_progressive_advance_and_warranty_use_contract_amount() {
        let advance = compute(PaymentInput::new(
            CustomerClass::Huawei,
            PaymentKind::Advance,
            d("200000"),
        ))
        .unwrap();
        assert_eq!(advance.amount, d("20000"));
        assert_eq!(advance.calculation_formula, "200,000 × 10%");
        assert_eq!(advance.amount_in_words, "贰万元整");

        let warranty = compute(PaymentInput::new(
            CustomerClass::Construction,
            PaymentKind::Warranty,
            d("200000"),
        ))
        .unwrap();
        assert_eq!(warranty.amount, d("6000"));
        assert_eq!(warranty.calculation_formula, "200,000 × 3%");
    }

    #[test]
    fn test_progressive_delivery_and_completion() {
        let delivery = compute(
            PaymentInput::new(CustomerClass::Huawei, PaymentKind::Delivery, d("500000"))
                .with_progress(Some(d("100000")), Some(d("20000"))),
        )
        .unwrap();
        assert_eq!(delivery.amount, d("60000"));
        assert_eq!(delivery.calculation_formula, "100,000 × 80% - 20,000");
        assert_eq!(delivery.amount_in_simple, "60,000.00");

        let completion = compute(
            PaymentInput::new(CustomerClass::Construction, PaymentKind::Completion, d("500000"))
                .with_progress(Some(d("100000")), Some(d("80000"))),
        )
        .unwrap();
        assert_eq!(completion.amount, d("17000"));
        assert_eq!(completion.calculation_formula, "100,000 × 97% - 80,000");
    }

    #[test]
    fn test_progressive_negative_result_clamped() {
        let result = compute(
            PaymentInput::new(CustomerClass::Construction, PaymentKind::Delivery, d("5000"))
                .with_progress(Some(d("1000")), Some(d("900"))),
        )
        .unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.amount_in_words, "零元整");
        assert_eq!(result.amount_in_simple, "0.00");
        assert_eq!(result.calculation_formula, "1,000 × 80% - 900");
    }

    #[test]
    fn test_progressive_zero_fields_allowed() {
        let result = compute(
            PaymentInput::new(CustomerClass::Huawei, PaymentKind::Delivery, d("5000"))
                .with_progress(Some(Decimal::ZERO), Some(Decimal::ZERO)),
        )
        .unwrap();
        assert_eq!(result.amount, Decimal::ZERO);
    }

    #[test]
    fn test_progressive_missing_fields() {
        let err = compute(
            PaymentInput::new(CustomerClass::Huawei, PaymentKind::Completion, d("5000"))
                .with_progress(Some(d("1000")), None),
        )
        .unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::MissingProgressiveField);
        assert!(err.to_string().contains("previouslyPaid"));

        let err = compute(PaymentInput::new(
            CustomerClass::Construction,
            PaymentKind::Delivery,
            d("5000"),
        ))
        .unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::MissingProgressiveField);
    }

    #[test]
    fn test_invalid_contract_amount() {
        for amount in ["0", "-1"] {
            let err = compute(PaymentInput::new(
                CustomerClass::WorksBureau,
                PaymentKind::Advance,
                d(amount),
            ))
            .unwrap_err();
            assert_eq!(err.kind(), InvalidInputKind::ContractAmount);
        }
    }

    #[test]
    fn test_negative_progress_figure_rejected() {
        let err = compute(
            PaymentInput::new(CustomerClass::Huawei, PaymentKind::Delivery, d("5000"))
                .with_progress(Some(d("-1")), Some(d("0"))),
        )
        .unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::Amount);
    }

    #[test]
    fn test_unsupported_customer_class() {
        for class in [CustomerClass::Hsbc, CustomerClass::Other] {
            let err = compute(PaymentInput::new(class, PaymentKind::Advance, d("1000")))
                .unwrap_err();
            assert_eq!(err.kind(), InvalidInputKind::UnsupportedCustomerClass);
        }
    }

    #[test]
    fn test_idempotent() {
        let input = PaymentInput::new(CustomerClass::Huawei, PaymentKind::Delivery, d("800"))
            .with_progress(Some(d("12345.67")), Some(d("100")));
        assert_eq!(compute(input.clone()), compute(input));
    }
}
