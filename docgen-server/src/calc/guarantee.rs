//! 保函金额计算
//!
//! 汇丰模板使用前端传入的自定义比例 (百分数)，其余模板使用比例表中的默认值，
//! 没有默认值的组合金额为 0。

use rust_decimal::Decimal;
use shared::models::{CustomerClass, GuaranteeKind};

use super::money::round_money;
use super::ratio::RatioTable;
use super::{CalcError, InvalidInputKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuaranteeInput {
    pub template: CustomerClass,
    pub kind: GuaranteeKind,
    pub contract_amount: Decimal,
    /// 自定义比例 (百分数 0-100)
    pub custom_ratio: Option<Decimal>,
}

impl GuaranteeInput {
    pub fn new(template: CustomerClass, kind: GuaranteeKind, contract_amount: Decimal) -> Self {
        Self {
            template,
            kind,
            contract_amount,
            custom_ratio: None,
        }
    }

    pub fn with_custom_ratio(mut self, ratio: Option<Decimal>) -> Self {
        self.custom_ratio = ratio;
        self
    }
}

fn validate(input: &GuaranteeInput) -> Result<(), CalcError> {
    if input.contract_amount <= Decimal::ZERO {
        return Err(CalcError::invalid(
            InvalidInputKind::ContractAmount,
            format!(
                "Contract amount must be greater than 0, got {}",
                input.contract_amount
            ),
        ));
    }
    if let Some(ratio) = input.custom_ratio
        && (ratio < Decimal::ZERO || ratio > Decimal::ONE_HUNDRED)
    {
        return Err(CalcError::invalid(
            InvalidInputKind::Ratio,
            format!("Custom ratio must be between 0 and 100, got {ratio}"),
        ));
    }
    Ok(())
}

/// 实际使用的保函比例 (小数)
pub fn guarantee_ratio(table: &RatioTable, input: &GuaranteeInput) -> Result<Decimal, CalcError> {
    validate(input)?;
    if input.template == CustomerClass::Hsbc
        && let Some(custom) = input.custom_ratio
    {
        return Ok(custom / Decimal::ONE_HUNDRED);
    }
    Ok(table
        .guarantee_default(input.template, input.kind)
        .unwrap_or(Decimal::ZERO))
}

/// 保函金额 (两位小数)
pub fn compute_guarantee_amount(
    table: &RatioTable,
    input: &GuaranteeInput,
) -> Result<Decimal, CalcError> {
    let ratio = guarantee_ratio(table, input)?;
    Ok(round_money(input.contract_amount * ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn amount(input: GuaranteeInput) -> Result<Decimal, CalcError> {
        compute_guarantee_amount(&RatioTable::default(), &input)
    }

    #[test]
    fn test_hsbc_custom_ratio() {
        let input = GuaranteeInput::new(CustomerClass::Hsbc, GuaranteeKind::Advance, d("100000"))
            .with_custom_ratio(Some(d("25")));
        assert_eq!(amount(input.clone()).unwrap(), d("25000.00"));
        assert_eq!(
            guarantee_ratio(&RatioTable::default(), &input).unwrap(),
            d("0.25")
        );
    }

    #[test]
    fn test_hsbc_without_custom_ratio_is_zero() {
        let input =
            GuaranteeInput::new(CustomerClass::Hsbc, GuaranteeKind::Performance, d("100000"));
        assert_eq!(amount(input).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_custom_ratio_ignored_for_other_templates() {
        let input =
            GuaranteeInput::new(CustomerClass::WorksBureau, GuaranteeKind::Advance, d("100000"))
                .with_custom_ratio(Some(d("5")));
        assert_eq!(amount(input).unwrap(), d("30000"));
    }

    #[test]
    fn test_default_ratios() {
        let cases = [
            (CustomerClass::WorksBureau, GuaranteeKind::Delivery, "50000"),
            (CustomerClass::Construction, GuaranteeKind::Advance, "10000"),
            (CustomerClass::Construction, GuaranteeKind::Warranty, "3000"),
            (CustomerClass::Construction, GuaranteeKind::Performance, "0"),
            (CustomerClass::Huawei, GuaranteeKind::Advance, "0"),
            (CustomerClass::Other, GuaranteeKind::Warranty, "0"),
        ];
        for (template, kind, expected) in cases {
            let input = GuaranteeInput::new(template, kind, d("100000"));
            assert_eq!(amount(input).unwrap(), d(expected), "{template}/{kind}");
        }
    }

    #[test]
    fn test_rounds_to_cents() {
        let input = GuaranteeInput::new(CustomerClass::Hsbc, GuaranteeKind::Warranty, d("333.33"))
            .with_custom_ratio(Some(d("3.5")));
        // 333.33 × 0.035 = 11.66655
        assert_eq!(amount(input).unwrap(), d("11.67"));
    }

    #[test]
    fn test_idempotent() {
        let input =
            GuaranteeInput::new(CustomerClass::Hsbc, GuaranteeKind::Delivery, d("98765.43"))
                .with_custom_ratio(Some(d("7.5")));
        // 98765.43 × 0.075 = 7407.40725
        assert_eq!(amount(input.clone()).unwrap(), d("7407.41"));
        assert_eq!(amount(input.clone()), amount(input.clone()));
        assert_eq!(
            guarantee_ratio(&RatioTable::default(), &input),
            guarantee_ratio(&RatioTable::default(), &input)
        );
    }

    #[test]
    fn test_invalid_inputs() {
        let err = amount(GuaranteeInput::new(
            CustomerClass::WorksBureau,
            GuaranteeKind::Advance,
            Decimal::ZERO,
        ))
        .unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::ContractAmount);

        for bad in ["-1", "100.5"] {
            let err = amount(
                GuaranteeInput::new(CustomerClass::Hsbc, GuaranteeKind::Advance, d("1000"))
                    .with_custom_ratio(Some(d(bad))),
            )
            .unwrap_err();
            assert_eq!(err.kind(), InvalidInputKind::Ratio);
        }
    }
}
