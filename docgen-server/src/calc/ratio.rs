//! 比例表
//!
//! 付款比例、保函默认比例和质保金比例的唯一数据源。
//! 启动时构造一次，通过 `Arc` 注入到所有调用方，运行期只读。

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{CustomerClass, GuaranteeKind, PaymentKind};

/// 四种付款类型各自的比例
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRatios {
    pub advance: Decimal,
    pub delivery: Decimal,
    pub completion: Decimal,
    pub warranty: Decimal,
}

impl PaymentRatios {
    pub fn get(&self, kind: PaymentKind) -> Decimal {
        match kind {
            PaymentKind::Advance => self.advance,
            PaymentKind::Delivery => self.delivery,
            PaymentKind::Completion => self.completion,
            PaymentKind::Warranty => self.warranty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioTable {
    /// 工务署: 合同金额 × 比例
    pub flat: PaymentRatios,
    /// 华为 / 建筑公司: 到货款、竣工款按本期投资额计算
    pub progressive: PaymentRatios,
    /// 保函默认比例 (未列出的组合为 0)
    pub guarantee_defaults: HashMap<(CustomerClass, GuaranteeKind), Decimal>,
    /// 质保金比例
    pub warranty_retention: Decimal,
}

impl RatioTable {
    /// 付款比例; 没有付款表的客户类型返回 None
    pub fn payment_ratio(&self, class: CustomerClass, kind: PaymentKind) -> Option<Decimal> {
        match class {
            CustomerClass::WorksBureau => Some(self.flat.get(kind)),
            CustomerClass::Huawei | CustomerClass::Construction => {
                Some(self.progressive.get(kind))
            }
            CustomerClass::Hsbc | CustomerClass::Other => None,
        }
    }

    pub fn guarantee_default(&self, class: CustomerClass, kind: GuaranteeKind) -> Option<Decimal> {
        self.guarantee_defaults.get(&(class, kind)).copied()
    }
}

impl Default for RatioTable {
    fn default() -> Self {
        let guarantee_defaults = HashMap::from([
            (
                (CustomerClass::WorksBureau, GuaranteeKind::Advance),
                Decimal::new(30, 2),
            ),
            (
                (CustomerClass::WorksBureau, GuaranteeKind::Delivery),
                Decimal::new(50, 2),
            ),
            (
                (CustomerClass::Construction, GuaranteeKind::Advance),
                Decimal::new(10, 2),
            ),
            (
                (CustomerClass::Construction, GuaranteeKind::Warranty),
                Decimal::new(3, 2),
            ),
        ]);

        Self {
            flat: PaymentRatios {
                advance: Decimal::new(30, 2),
                delivery: Decimal::new(50, 2),
                completion: Decimal::new(10, 2),
                warranty: Decimal::new(10, 2),
            },
            progressive: PaymentRatios {
                advance: Decimal::new(10, 2),
                delivery: Decimal::new(80, 2),
                completion: Decimal::new(97, 2),
                warranty: Decimal::new(3, 2),
            },
            guarantee_defaults,
            warranty_retention: Decimal::new(3, 2),
        }
    }
}
