//! Customer Class Model

use serde::{Deserialize, Serialize};

/// 客户类型 / 模板类型
///
/// 决定使用哪一套付款比例表和保函默认比例。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CustomerClass {
    /// 工务署 (固定比例)
    WorksBureau,
    /// 华为 (按进度)
    Huawei,
    /// 建筑公司 (按进度)
    Construction,
    /// 汇丰银行 (保函自定义比例)
    Hsbc,
    Other,
}

impl CustomerClass {
    pub const ALL: [CustomerClass; 5] = [
        CustomerClass::WorksBureau,
        CustomerClass::Huawei,
        CustomerClass::Construction,
        CustomerClass::Hsbc,
        CustomerClass::Other,
    ];

    /// Wire name, also used as the template sub-directory
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WorksBureau => "works_bureau",
            Self::Huawei => "huawei",
            Self::Construction => "construction",
            Self::Hsbc => "hsbc",
            Self::Other => "other",
        }
    }

    /// 按进度付款的客户 (到货款/竣工款依赖本期投资额与已付金额)
    pub const fn is_progressive(&self) -> bool {
        matches!(self, Self::Huawei | Self::Construction)
    }
}

impl std::fmt::Display for CustomerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
