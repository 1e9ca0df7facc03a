//! 模板变量
//!
//! 把请求中的合同字段 (包括未声明的透传字段) 与计算结果合并为扁平的
//! `{变量名: 文本}` 映射。金额统一格式化为 `¥1,234.56` 并附带 `*InWords` 大写，
//! 日期格式化为 `YYYY年M月D日`。

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use shared::models::{
    GuaranteeContractData, GuaranteeKind, PaymentContractData, WarrantyContractData,
};

use crate::calc::money::{format_currency, format_percent, format_simple};
use crate::calc::{GuaranteeInput, PaymentCalculationResult, PaymentInput};
use crate::calc::numeral::to_chinese_currency_words;
use crate::utils::format::{format_cn_date, format_date_text};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables(BTreeMap<String, String>);

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 金额字段: `key` = `¥1,234.56`, `keyInWords` = 大写
    pub fn set_money(&mut self, key: &str, amount: Decimal) -> &mut Self {
        self.set(key, format_currency(amount));
        self.set(format!("{key}InWords"), to_chinese_currency_words(amount))
    }

    /// 日期字段; 缺省时写入空串
    pub fn set_date(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        self.set(key, value.map(format_date_text).unwrap_or_default())
    }

    /// 透传字段: 字符串、数字、布尔直接转文本，数组和对象忽略
    pub fn merge_passthrough(&mut self, extra: &Map<String, Value>) -> &mut Self {
        for (key, value) in extra {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => continue,
            };
            self.set(key.clone(), text);
        }
        self
    }
}

/// 付款申请变量
pub fn payment_variables(
    data: &PaymentContractData,
    input: &PaymentInput,
    payment_ratio: Decimal,
    result: &PaymentCalculationResult,
    today: NaiveDate,
) -> TemplateVariables {
    let mut vars = TemplateVariables::new();
    vars.merge_passthrough(&data.extra);

    let contract_name = data
        .contract_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| format!("{}合同", data.project_name));

    vars.set("contractNo", data.contract_no.as_str())
        .set("contractName", contract_name)
        .set("customerName", data.customer_name.as_str())
        .set("projectName", data.project_name.as_str())
        .set_money("contractAmount", input.contract_amount)
        .set_money(
            "currentInvestment",
            input.current_investment.unwrap_or_default(),
        )
        .set_money("previouslyPaid", input.previously_paid.unwrap_or_default())
        .set("paymentRatio", format_percent(payment_ratio))
        .set_money("paymentAmount", result.amount)
        .set("paymentAmountInSimple", result.amount_in_simple.as_str())
        .set("calculationFormula", result.calculation_formula.as_str())
        .set_date(
            "advanceGuaranteeValidity",
            data.advance_guarantee_validity.as_deref(),
        )
        .set_date(
            "deliveryGuaranteeValidity",
            data.delivery_guarantee_validity.as_deref(),
        )
        .set_date(
            "warrantyGuaranteeValidity",
            data.warranty_guarantee_validity.as_deref(),
        )
        .set_date("signDate", data.sign_date.as_deref())
        .set("currentDate", format_cn_date(today));
    vars
}

/// 保函申请变量
pub fn guarantee_variables(
    data: &GuaranteeContractData,
    input: &GuaranteeInput,
    amount: Decimal,
    ratio: Decimal,
    today: NaiveDate,
) -> TemplateVariables {
    let mut vars = TemplateVariables::new();
    vars.merge_passthrough(&data.extra);

    let validity = |k: GuaranteeKind| {
        (input.kind == k)
            .then(|| data.guarantee_info.as_ref()?.validity_for(k))
            .flatten()
    };

    vars.set("contractNo", data.contract_no.as_str())
        .set("contractName", data.contract_name.as_str())
        .set("customerName", data.customer_name.as_str())
        .set("projectName", data.project_name.as_str())
        .set_money("contractAmount", input.contract_amount)
        .set_money("guaranteeAmount", amount)
        .set("guaranteeAmountInSimple", format_simple(amount))
        .set("guaranteeRatio", format_percent(ratio))
        .set_date(
            "advancePaymentValidity",
            validity(GuaranteeKind::Advance),
        )
        .set_date(
            "deliveryPaymentValidity",
            validity(GuaranteeKind::Delivery),
        )
        .set_date("warrantyValidity", validity(GuaranteeKind::Warranty))
        .set_date("validityPeriod", Some(data.validity_period.as_str()))
        .set_date("signDate", data.sign_date.as_deref())
        .set("currentDate", format_cn_date(today));
    vars
}

/// 质保金文档变量
pub fn warranty_variables(
    data: &WarrantyContractData,
    contract_amount: Decimal,
    warranty_amount: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    period_years: u32,
    today: NaiveDate,
) -> TemplateVariables {
    let mut vars = TemplateVariables::new();
    vars.merge_passthrough(&data.extra);

    vars.set("contractNo", data.contract_no.as_str())
        .set("contractName", data.contract_name.as_str())
        .set("customerName", data.customer_name.as_str())
        .set("projectName", data.project_name.as_str())
        .set_money("contractAmount", contract_amount)
        .set_money("warrantyAmount", warranty_amount)
        .set_money("applyAmount", warranty_amount)
        .set("warrantyStartDate", format_cn_date(start))
        .set("warrantyEndDate", format_cn_date(end))
        .set("warrantyPeriod", period_years.to_string())
        .set("currentDate", format_cn_date(today));
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{RatioTable, compute_payment};
    use shared::models::{CustomerClass, GuaranteeInfo, PaymentKind};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_passthrough_values() {
        let mut extra = Map::new();
        extra.insert("bank".into(), Value::String("招商银行".into()));
        extra.insert("floors".into(), serde_json::json!(12));
        extra.insert("urgent".into(), Value::Bool(true));
        extra.insert("notes".into(), Value::Null);
        extra.insert("items".into(), serde_json::json!([1, 2]));

        let mut vars = TemplateVariables::new();
        vars.merge_passthrough(&extra);
        assert_eq!(vars.get("bank"), Some("招商银行"));
        assert_eq!(vars.get("floors"), Some("12"));
        assert_eq!(vars.get("urgent"), Some("true"));
        assert_eq!(vars.get("notes"), Some(""));
        assert_eq!(vars.get("items"), None);
    }

    #[test]
    fn test_payment_variables() {
        let data = PaymentContractData {
            contract_no: "HT-001".into(),
            customer_name: "深圳市建筑工务署".into(),
            project_name: "机房改造".into(),
            contract_amount: 100000.0,
            sign_date: Some("2024-01-15".into()),
            advance_guarantee_validity: Some("2024-12-31".into()),
            ..Default::default()
        };
        let table = RatioTable::default();
        let input = PaymentInput::new(
            CustomerClass::WorksBureau,
            PaymentKind::Advance,
            Decimal::new(100000, 0),
        );
        let result = compute_payment(&table, &input).unwrap();
        let ratio = table
            .payment_ratio(CustomerClass::WorksBureau, PaymentKind::Advance)
            .unwrap();

        let vars = payment_variables(&data, &input, ratio, &result, today());
        assert_eq!(vars.get("contractName"), Some("机房改造合同"));
        assert_eq!(vars.get("contractAmount"), Some("¥100,000.00"));
        assert_eq!(vars.get("contractAmountInWords"), Some("壹拾万元整"));
        assert_eq!(vars.get("paymentRatio"), Some("30%"));
        assert_eq!(vars.get("paymentAmount"), Some("¥30,000.00"));
        assert_eq!(vars.get("paymentAmountInWords"), Some("叁万元整"));
        assert_eq!(vars.get("paymentAmountInSimple"), Some("30,000.00"));
        assert_eq!(vars.get("calculationFormula"), Some("100,000 × 30%"));
        assert_eq!(vars.get("currentInvestment"), Some("¥0.00"));
        assert_eq!(vars.get("previouslyPaidInWords"), Some("零元整"));
        assert_eq!(vars.get("signDate"), Some("2024年1月15日"));
        assert_eq!(vars.get("advanceGuaranteeValidity"), Some("2024年12月31日"));
        assert_eq!(vars.get("deliveryGuaranteeValidity"), Some(""));
        assert_eq!(vars.get("currentDate"), Some("2024年6月1日"));
    }

    #[test]
    fn test_payment_variables_keep_contract_name() {
        let data = PaymentContractData {
            contract_name: Some("设备采购合同".into()),
            project_name: "机房改造".into(),
            contract_amount: 10.0,
            ..Default::default()
        };
        let result = PaymentCalculationResult {
            amount: Decimal::ONE,
            amount_in_words: "壹元整".into(),
            amount_in_simple: "1.00".into(),
            calculation_formula: "10 × 10%".into(),
        };
        let input = PaymentInput::new(
            CustomerClass::WorksBureau,
            PaymentKind::Advance,
            Decimal::TEN,
        );
        let vars = payment_variables(&data, &input, Decimal::new(1, 1), &result, today());
        assert_eq!(vars.get("contractName"), Some("设备采购合同"));
    }

    #[test]
    fn test_guarantee_variables_only_matching_validity() {
        let data = GuaranteeContractData {
            contract_no: "HT-9".into(),
            contract_name: "设备采购合同".into(),
            contract_amount: 200000.0,
            validity_period: "2025-12-31".into(),
            guarantee_info: Some(GuaranteeInfo {
                advance_payment_validity: Some("2025-01-31".into()),
                warranty_validity: Some("2026-06-30".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let input = GuaranteeInput::new(
            CustomerClass::Hsbc,
            GuaranteeKind::Warranty,
            Decimal::new(200000, 0),
        );
        let vars = guarantee_variables(
            &data,
            &input,
            Decimal::new(6000, 0),
            Decimal::new(3, 2),
            today(),
        );
        assert_eq!(vars.get("guaranteeAmount"), Some("¥6,000.00"));
        assert_eq!(vars.get("guaranteeAmountInWords"), Some("陆仟元整"));
        assert_eq!(vars.get("guaranteeRatio"), Some("3%"));
        assert_eq!(vars.get("warrantyValidity"), Some("2026年6月30日"));
        assert_eq!(vars.get("advancePaymentValidity"), Some(""));
        assert_eq!(vars.get("validityPeriod"), Some("2025年12月31日"));
    }

    #[test]
    fn test_warranty_variables() {
        let data = WarrantyContractData {
            contract_no: "HT-5".into(),
            contract_name: "机房合同".into(),
            customer_name: "华为".into(),
            project_name: "机房".into(),
            contract_amount: 100000.0,
            ..Default::default()
        };
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let vars = warranty_variables(
            &data,
            Decimal::new(100000, 0),
            Decimal::new(3000, 0),
            start,
            end,
            2,
            today(),
        );
        assert_eq!(vars.get("contractAmount"), Some("¥100,000.00"));
        assert_eq!(vars.get("warrantyAmount"), Some("¥3,000.00"));
        assert_eq!(vars.get("applyAmount"), Some("¥3,000.00"));
        assert_eq!(vars.get("applyAmountInWords"), Some("叁仟元整"));
        assert_eq!(vars.get("warrantyStartDate"), Some("2024年3月1日"));
        assert_eq!(vars.get("warrantyEndDate"), Some("2026年3月1日"));
        assert_eq!(vars.get("warrantyPeriod"), Some("2"));
    }
}
