//! Contract Model

use serde::{Deserialize, Serialize};

use super::guarantee::GuaranteeKind;

/// 合同基本信息
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub customer_name: String,
    /// 合同金额
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub contract_no: String,
    #[serde(default)]
    pub sign_date: String,
}

/// 付款条款 (ratio 为百分数)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentTerm {
    #[serde(rename = "type")]
    pub kind: String,
    pub ratio: f64,
}

/// 保函信息 (比例为百分数)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_payment_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_payment_validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_payment_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_payment_validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_validity: Option<String>,
}

impl GuaranteeInfo {
    /// 指定保函类型的自定义比例
    pub fn ratio_for(&self, kind: GuaranteeKind) -> Option<f64> {
        match kind {
            GuaranteeKind::Advance => self.advance_payment_ratio,
            GuaranteeKind::Performance => self.performance_ratio,
            GuaranteeKind::Warranty => self.warranty_ratio,
            GuaranteeKind::Delivery => self.delivery_payment_ratio,
        }
    }

    /// 指定保函类型的有效期 (履约保函无单独有效期)
    pub fn validity_for(&self, kind: GuaranteeKind) -> Option<&str> {
        match kind {
            GuaranteeKind::Advance => self.advance_payment_validity.as_deref(),
            GuaranteeKind::Delivery => self.delivery_payment_validity.as_deref(),
            GuaranteeKind::Warranty => self.warranty_validity.as_deref(),
            GuaranteeKind::Performance => None,
        }
    }
}

/// 合同创建 / 保存请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractPayload {
    pub contract_info: ContractInfo,
    pub payment_terms: Vec<PaymentTerm>,
    pub guarantee_info: Option<GuaranteeInfo>,
}

/// 当前合同记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    pub contract_info: ContractInfo,
    pub payment_terms: Vec<PaymentTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guarantee_info: Option<GuaranteeInfo>,
    /// 最后保存时间 (Unix millis)
    pub updated_at: i64,
}

impl ContractRecord {
    pub fn from_payload(id: impl Into<String>, payload: ContractPayload, updated_at: i64) -> Self {
        Self {
            id: id.into(),
            contract_info: payload.contract_info,
            payment_terms: payload.payment_terms,
            guarantee_info: payload.guarantee_info,
            updated_at,
        }
    }
}
