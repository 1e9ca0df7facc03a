//! Payment Application Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::customer::CustomerClass;

/// 付款类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// 预付款
    Advance,
    /// 到货款
    Delivery,
    /// 竣工款
    Completion,
    /// 质保金
    Warranty,
}

impl PaymentKind {
    pub const ALL: [PaymentKind; 4] = [
        PaymentKind::Advance,
        PaymentKind::Delivery,
        PaymentKind::Completion,
        PaymentKind::Warranty,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Delivery => "delivery",
            Self::Completion => "completion",
            Self::Warranty => "warranty",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Advance => "预付款",
            Self::Delivery => "到货款",
            Self::Completion => "竣工款",
            Self::Warranty => "质保金",
        }
    }
}

impl std::fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// POST /api/payment/calculate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCalculateRequest {
    pub customer_type: CustomerClass,
    pub payment_type: PaymentKind,
    #[serde(default)]
    pub contract_amount: f64,
    /// 本期投资额 (按进度客户)
    pub current_investment: Option<f64>,
    /// 已付金额 (按进度客户)
    pub previously_paid: Option<f64>,
}

/// 付款金额计算结果 (wire form)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCalculation {
    pub amount: f64,
    pub amount_in_words: String,
    /// 千分位 + 两位小数, e.g. "30,000.00"
    pub amount_in_simple: String,
    pub calculation_formula: String,
}

/// 付款申请合同数据
///
/// Unknown keys are kept in `extra` and passed through to the template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentContractData {
    #[serde(default)]
    pub contract_no: String,
    pub contract_name: Option<String>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub contract_amount: f64,
    pub current_investment: Option<f64>,
    pub previously_paid: Option<f64>,
    pub sign_date: Option<String>,
    pub advance_guarantee_validity: Option<String>,
    pub delivery_guarantee_validity: Option<String>,
    pub warranty_guarantee_validity: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// POST /api/payment/generate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentGenerateRequest {
    pub template_type: CustomerClass,
    pub payment_type: PaymentKind,
    pub contract_data: PaymentContractData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_payment_kind_rejected() {
        let json = r#"{"customerType":"huawei","paymentType":"bonus","contractAmount":1}"#;
        assert!(serde_json::from_str::<PaymentCalculateRequest>(json).is_err());
    }

    #[test]
    fn test_generate_request_keeps_extra_fields() {
        let json = r#"{
            "templateType": "construction",
            "paymentType": "delivery",
            "contractData": {
                "contractNo": "HT-001",
                "customerName": "中建三局",
                "projectName": "机房改造",
                "contractAmount": 100000,
                "currentInvestment": 50000,
                "previouslyPaid": 10000,
                "bankAccount": "6222 0000"
            }
        }"#;
        let req: PaymentGenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.template_type, CustomerClass::Construction);
        assert_eq!(req.payment_type, PaymentKind::Delivery);
        assert_eq!(req.contract_data.current_investment, Some(50000.0));
        assert_eq!(
            req.contract_data.extra.get("bankAccount"),
            Some(&Value::String("6222 0000".into()))
        );
        assert!(req.contract_data.contract_name.is_none());
    }
}
