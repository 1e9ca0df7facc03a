//! Warranty (质保金) Document Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 质保金文档类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WarrantyDocumentType {
    /// 质保证书
    #[serde(rename = "warranty_certificate")]
    Certificate,
    /// 质保金支付申请
    #[serde(rename = "warranty_payment_application")]
    PaymentApplication,
    /// 质保金支付审批
    #[serde(rename = "warranty_payment_approval")]
    PaymentApproval,
    /// 设备评价表
    #[serde(rename = "warranty_equipment_evaluation")]
    EquipmentEvaluation,
    /// 问题统计表 (xlsx)
    #[serde(rename = "warranty_issue_statistics")]
    IssueStatistics,
    /// 扣款清单 (xlsx)
    #[serde(rename = "warranty_deduction_list")]
    DeductionList,
}

impl WarrantyDocumentType {
    pub const ALL: [WarrantyDocumentType; 6] = [
        WarrantyDocumentType::Certificate,
        WarrantyDocumentType::PaymentApplication,
        WarrantyDocumentType::PaymentApproval,
        WarrantyDocumentType::EquipmentEvaluation,
        WarrantyDocumentType::IssueStatistics,
        WarrantyDocumentType::DeductionList,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Certificate => "warranty_certificate",
            Self::PaymentApplication => "warranty_payment_application",
            Self::PaymentApproval => "warranty_payment_approval",
            Self::EquipmentEvaluation => "warranty_equipment_evaluation",
            Self::IssueStatistics => "warranty_issue_statistics",
            Self::DeductionList => "warranty_deduction_list",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Certificate => "质保证书",
            Self::PaymentApplication => "质保金支付申请",
            Self::PaymentApproval => "质保金支付审批",
            Self::EquipmentEvaluation => "设备评价表",
            Self::IssueStatistics => "问题统计表",
            Self::DeductionList => "扣款清单",
        }
    }

    /// 模板文件扩展名
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::IssueStatistics | Self::DeductionList => "xlsx",
            _ => "docx",
        }
    }

    /// 模板文件名, e.g. `warranty_certificate.docx`
    pub fn template_file_name(&self) -> String {
        format!("{}.{}", self.as_str(), self.extension())
    }
}

/// 质保金文档合同数据
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyContractData {
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
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// POST /api/warranty/generate payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyGenerateRequest {
    /// 质保开始日期 (YYYY-MM-DD)
    #[serde(default)]
    pub warranty_start_date: String,
    pub contract_data: WarrantyContractData,
    #[serde(default)]
    pub selected_docs: Vec<WarrantyDocumentType>,
    /// 质保期 (年)，缺省使用服务端配置
    pub warranty_period: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_file_names() {
        assert_eq!(
            WarrantyDocumentType::Certificate.template_file_name(),
            "warranty_certificate.docx"
        );
        assert_eq!(
            WarrantyDocumentType::DeductionList.template_file_name(),
            "warranty_deduction_list.xlsx"
        );
        assert_eq!(WarrantyDocumentType::IssueStatistics.extension(), "xlsx");
    }

    #[test]
    fn test_wire_names_match_as_str() {
        for doc in WarrantyDocumentType::ALL {
            let json = serde_json::to_string(&doc).unwrap();
            assert_eq!(json, format!("\"{}\"", doc.as_str()));
        }
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"warrantyStartDate":"2024-03-01","contractData":{"contractNo":"A"}}"#;
        let req: WarrantyGenerateRequest = serde_json::from_str(json).unwrap();
        assert!(req.selected_docs.is_empty());
        assert!(req.warranty_period.is_none());
        assert_eq!(req.contract_data.contract_amount, 0.0);
    }
}
