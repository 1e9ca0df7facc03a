//! Guarantee (保函) Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::contract::GuaranteeInfo;
use super::customer::CustomerClass;

/// 保函类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GuaranteeKind {
    /// 预付款保函
    Advance,
    /// 履约保函
    Performance,
    /// 质保金保函
    Warranty,
    /// 到货款保函
    Delivery,
}

impl GuaranteeKind {
    pub const ALL: [GuaranteeKind; 4] = [
        GuaranteeKind::Advance,
        GuaranteeKind::Performance,
        GuaranteeKind::Warranty,
        GuaranteeKind::Delivery,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Performance => "performance",
            Self::Warranty => "warranty",
            Self::Delivery => "delivery",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Advance => "预付款保函",
            Self::Performance => "履约保函",
            Self::Warranty => "质保金保函",
            Self::Delivery => "到货款保函",
        }
    }
}

impl std::fmt::Display for GuaranteeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// POST /api/guarantee/calculate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeCalculateRequest {
    pub template_type: CustomerClass,
    pub guarantee_type: GuaranteeKind,
    #[serde(default)]
    pub contract_amount: f64,
    /// 自定义比例 (百分数 0-100)，仅汇丰模板生效
    pub custom_ratio: Option<f64>,
}

/// 保函金额计算结果 (wire form)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeCalculation {
    pub amount: f64,
    /// 实际使用的比例 (小数, 0.3 = 30%)
    pub ratio: f64,
    /// e.g. "30%"
    pub ratio_text: String,
    pub amount_in_words: String,
    pub amount_in_simple: String,
}

/// 保函申请合同数据
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeContractData {
    #[serde(default)]
    pub contract_no: String,
    #[serde(default)]
    pub contract_name: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub contract_amount: f64,
    #[serde(default)]
    pub validity_period: String,
    pub sign_date: Option<String>,
    /// 汇丰模板的自定义比例与各类保函有效期
    pub guarantee_info: Option<GuaranteeInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// POST /api/guarantee/generate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteeGenerateRequest {
    pub template_type: CustomerClass,
    pub guarantee_type: GuaranteeKind,
    pub contract_data: GuaranteeContractData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names() {
        let kinds: Vec<GuaranteeKind> =
            serde_json::from_str(r#"["advance","performance","warranty","delivery"]"#).unwrap();
        assert_eq!(kinds, GuaranteeKind::ALL.to_vec());
    }

    #[test]
    fn test_generate_request_with_guarantee_info() {
        let json = r#"{
            "templateType": "hsbc",
            "guaranteeType": "performance",
            "contractData": {
                "contractNo": "HT-9",
                "contractName": "设备采购合同",
                "customerName": "汇丰",
                "projectName": "数据中心",
                "contractAmount": 200000,
                "validityPeriod": "2025-12-31",
                "guaranteeInfo": { "performanceRatio": 15, "warrantyValidity": "2026-06-30" }
            }
        }"#;
        let req: GuaranteeGenerateRequest = serde_json::from_str(json).unwrap();
        let info = req.contract_data.guarantee_info.unwrap();
        assert_eq!(info.ratio_for(GuaranteeKind::Performance), Some(15.0));
        assert_eq!(info.ratio_for(GuaranteeKind::Advance), None);
        assert_eq!(
            info.validity_for(GuaranteeKind::Warranty),
            Some("2026-06-30")
        );
    }
}
