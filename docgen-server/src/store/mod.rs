//! Contract Store
//!
//! 保存"当前合同"。生成接口与前端共享同一份合同数据，
//! 存储实现通过 [`ContractStore`] 注入到 `ServerState`。

pub mod memory;

pub use memory::InMemoryContractStore;

use shared::models::ContractRecord;

/// 当前合同存储
pub trait ContractStore: Send + Sync + std::fmt::Debug {
    /// 当前合同; 尚未保存时返回 `None`
    fn current(&self) -> Option<ContractRecord>;

    /// 覆盖保存当前合同，返回保存后的记录
    fn save(&self, record: ContractRecord) -> ContractRecord;
}
